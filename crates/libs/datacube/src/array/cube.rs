use crate::{
    array::shape::{compute_n_elems, compute_strides},
    error::Error,
};
use num_traits::{One, Zero};
use std::{
    fmt::{Debug, Formatter},
    ops::{Index, IndexMut},
    slice::{Iter, IterMut},
};

/// A dense multidimensional array with a fixed number of dimensions.
///
/// The number of dimensions `N` is part of the type; the extent of each
/// dimension is chosen at construction and immutable afterwards. Elements
/// are stored contiguously in column-major order: the first dimension
/// varies the fastest when the storage is walked linearly.
///
/// Indexed access goes through a single linearization routine that checks
/// every component of the index tuple against the extent of its dimension.
/// Two cubes compare equal when their shapes, strides and element contents
/// all match; cubes with a different number of dimensions are different
/// types and cannot be compared at all.
pub struct DataCube<T, const N: usize> {
    /// Extent of each dimension.
    shape: [usize; N],
    /// Number of elements to skip to advance one step along each dimension.
    /// Derived from `shape` once at construction, never mutated.
    strides: [usize; N],
    /// Contiguous element storage; `data.len()` equals the product of all
    /// extents in `shape`.
    data: Vec<T>,
}

impl<T, const N: usize> DataCube<T, N> {
    /// Creates a new cube with every element set to `T::default()`.
    pub fn new(shape: [usize; N]) -> Self
    where
        T: Default + Clone,
    {
        Self {
            shape,
            strides: compute_strides(&shape),
            data: vec![T::default(); compute_n_elems(&shape)],
        }
    }

    /// Creates a new cube with every element set to zero.
    pub fn zeros(shape: [usize; N]) -> Self
    where
        T: Zero + Clone,
    {
        Self::splat(T::zero(), shape)
    }

    /// Creates a new cube with every element set to one.
    pub fn ones(shape: [usize; N]) -> Self
    where
        T: One + Clone,
    {
        Self::splat(T::one(), shape)
    }

    /// Creates a new cube with every element set to the given value.
    pub fn splat(value: T, shape: [usize; N]) -> Self
    where
        T: Clone,
    {
        Self {
            shape,
            strides: compute_strides(&shape),
            data: vec![value; compute_n_elems(&shape)],
        }
    }

    /// Creates a new cube taking ownership of the given values.
    ///
    /// The values are stored as-is, in linear order: the first dimension
    /// varies the fastest. Fails with [`Error::DimensionMismatch`] when the
    /// number of values does not equal the product of the extents.
    pub fn from_vec(shape: [usize; N], values: Vec<T>) -> Result<Self, Error> {
        let expected = compute_n_elems(&shape);
        if values.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            shape,
            strides: compute_strides(&shape),
            data: values,
        })
    }

    /// Creates a new cube copying the given values.
    ///
    /// Same contract as [`DataCube::from_vec`].
    pub fn from_slice(shape: [usize; N], values: &[T]) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_vec(shape, values.to_vec())
    }

    /// Returns the number of dimensions of the cube.
    pub const fn dimension(&self) -> usize { N }

    /// Returns the extent of each dimension.
    pub const fn shape(&self) -> &[usize; N] { &self.shape }

    /// Returns the stride of each dimension.
    pub const fn strides(&self) -> &[usize; N] { &self.strides }

    /// Returns the total number of elements in the cube.
    pub fn len(&self) -> usize { self.data.len() }

    /// Returns `true` when the cube holds no elements, i.e. when any
    /// dimension has extent zero.
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Returns the storage as a flat slice in linear order.
    pub fn as_slice(&self) -> &[T] { &self.data }

    /// Returns the storage as a mutable flat slice in linear order.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.data }

    /// Consumes the cube and returns its storage in linear order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Returns an iterator over the elements in linear order.
    pub fn iter(&self) -> Iter<T> { self.data.iter() }

    /// Returns a mutable iterator over the elements in linear order.
    pub fn iter_mut(&mut self) -> IterMut<T> { self.data.iter_mut() }

    /// Returns a reference to the element at the given index tuple.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when any component of the
    /// tuple reaches or exceeds the extent of its dimension.
    pub fn at(&self, indices: [usize; N]) -> Result<&T, Error> {
        let offset = self.linearize(&indices)?;
        Ok(&self.data[offset])
    }

    /// Returns a mutable reference to the element at the given index tuple.
    ///
    /// Same contract as [`DataCube::at`].
    pub fn at_mut(&mut self, indices: [usize; N]) -> Result<&mut T, Error> {
        let offset = self.linearize(&indices)?;
        Ok(&mut self.data[offset])
    }

    /// Transforms an index tuple into a single offset into the flat storage.
    ///
    /// Every indexed access funnels through here; the per-dimension bounds
    /// check is the container's only runtime safety guarantee.
    fn linearize(&self, indices: &[usize; N]) -> Result<usize, Error> {
        let mut offset = 0;
        for dim in 0..N {
            if indices[dim] >= self.shape[dim] {
                return Err(Error::IndexOutOfRange {
                    dim,
                    index: indices[dim],
                    size: self.shape[dim],
                });
            }
            offset += indices[dim] * self.strides[dim];
        }
        Ok(offset)
    }
}

impl<T, const N: usize> Index<[usize; N]> for DataCube<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, indices: [usize; N]) -> &Self::Output {
        match self.at(indices) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const N: usize> IndexMut<[usize; N]> for DataCube<T, N> {
    #[track_caller]
    fn index_mut(&mut self, indices: [usize; N]) -> &mut Self::Output {
        match self.at_mut(indices) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const N: usize> Clone for DataCube<T, N>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            shape: self.shape,
            strides: self.strides,
            data: self.data.clone(),
        }
    }
}

impl<T, const N: usize> PartialEq for DataCube<T, N>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.strides == other.strides && self.data == other.data
    }
}

impl<T, const N: usize> Eq for DataCube<T, N> where T: Eq {}

impl<T, const N: usize> Debug for DataCube<T, N>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "DataCube(shape={:?}, data={:?})", self.shape, self.data)
    }
}

impl<T, const N: usize> AsRef<[T]> for DataCube<T, N> {
    fn as_ref(&self) -> &[T] { self.as_slice() }
}
