//! # datacube
//!
//! Fixed-rank dense multidimensional array container intended as a common
//! base type for numeric data such as signals, matrices, images and time
//! stacks, plus a small paragraph-based annotation type.
//!
//! The number of dimensions is a const generic parameter of [`DataCube`];
//! the extent of each dimension is chosen at construction. Elements live in
//! one contiguous buffer and are addressed through a column-major stride
//! scheme: the first dimension varies the fastest when walking the buffer
//! linearly.
#![warn(missing_docs)]

pub mod array;
pub mod comment;
pub mod error;

pub use array::DataCube;
pub use comment::Comment;
pub use error::Error;

/// Full version of the crate as a short string, e.g. `"0.1.0"`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Major version component of [`VERSION`].
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Minor version component of [`VERSION`].
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Patch version component of [`VERSION`].
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
