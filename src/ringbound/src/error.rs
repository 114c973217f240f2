use thiserror::Error;

/// Failures surfaced by [`RingBuffer`](crate::RingBuffer) operations.
///
/// Every failure is local and synchronous: the offending call returns the
/// error immediately and leaves the buffer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// `new` or `resize` was given a capacity of 2 or less.
    #[error("capacity must be greater than 2, got {0}")]
    InvalidCapacity(usize),

    /// `front` was called on a buffer with no live elements.
    #[error("buffer is empty")]
    Empty,

    /// `average` was called on a buffer with no live elements.
    #[error("average of an empty buffer is undefined")]
    UndefinedAverage,
}
