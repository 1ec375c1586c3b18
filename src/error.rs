use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index is beyond the current container length
    #[error("index out of bounds: index {index} is beyond length {len}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the container
        len: usize,
    },
    /// Operation requires at least one live element
    #[error("container is empty")]
    Empty,
    /// Element-wise operation between containers of different lengths
    #[error("size mismatch: left operand has {left} elements, right operand has {right}")]
    SizeMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },
    /// A sentinel cursor was passed where a position is required
    #[error("cursor is detached: no position to resolve")]
    DetachedCursor,
}
