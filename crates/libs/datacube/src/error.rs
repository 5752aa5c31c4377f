//! Error type for the datacube crate.

/// Errors raised by the array API.
///
/// Both variants are synchronous precondition violations reported at the
/// call that caused them; there is no retry or recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index exceeded the extent of its dimension.
    #[error("index {index} out of range for dimension {dim} with size {size}")]
    IndexOutOfRange {
        /// The dimension whose bound was violated.
        dim: usize,
        /// The requested index.
        index: usize,
        /// The extent of that dimension; valid indices are `0..size`.
        size: usize,
    },

    /// A bulk fill supplied a number of values that does not match the
    /// product of the declared dimension sizes.
    #[error("expected {expected} values to fill the array, got {actual}")]
    DimensionMismatch {
        /// The product of the declared dimension sizes.
        expected: usize,
        /// The number of values actually supplied.
        actual: usize,
    },
}
