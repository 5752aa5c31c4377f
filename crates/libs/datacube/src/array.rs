//! Dense multidimensional array storage.
//!
//! The array stores its elements in a contiguous block of memory ordered
//! column-major style: the strides grow from left to right and the first
//! dimension varies the fastest.

mod cube;
mod shape;

pub use cube::DataCube;
