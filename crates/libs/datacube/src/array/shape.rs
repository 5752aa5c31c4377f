/// Computes the number of elements in an array with the given shape.
pub(crate) const fn compute_n_elems(shape: &[usize]) -> usize {
    let mut n_elems = 1;
    let mut i = 0;
    let n = shape.len();
    while i < n {
        n_elems *= shape[i];
        i += 1;
    }
    n_elems
}

/// Computes the strides of an array with the given shape.
///
/// The strides grow from left to right: `strides[0]` is 1 and each
/// subsequent stride is the product of the extents of all prior dimensions.
pub(crate) const fn compute_strides<const N: usize>(shape: &[usize; N]) -> [usize; N] {
    let mut strides = [1usize; N];
    let mut stride = 1;
    let mut i = 0;
    while i < N {
        strides[i] = stride;
        stride *= shape[i];
        i += 1;
    }
    strides
}
