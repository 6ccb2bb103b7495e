//! Error handling for the coffer library
//!
//! This module provides the crate-wide error type and the bounds-checking
//! helpers shared by every container.

use thiserror::Error;

/// Main error type for the coffer library
#[derive(Error, Debug)]
pub enum CofferError {
    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Structural precondition violated (bad capacity, inconsistent slice
    /// arguments, and the like)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of the violated precondition
        message: String,
    },

    /// Hard lookup of a key that is not present
    #[error("Key not found in container")]
    KeyNotFound,

    /// Memory allocation failures
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },
}

impl CofferError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an invalid operation error
    pub fn invalid_operation<S: Into<String>>(message: S) -> Self {
        Self::InvalidOperation { message: message.into() }
    }

    /// Create a key not found error
    pub fn key_not_found() -> Self {
        Self::KeyNotFound
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Get the error category for diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::InvalidOperation { .. } => "operation",
            Self::KeyNotFound => "key",
            Self::OutOfMemory { .. } => "memory",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CofferError>;

/// Assert that an index is within `[0, size)`
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(CofferError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that an insertion position is within `[0, size]`
#[inline]
pub fn check_insert_bounds(index: usize, size: usize) -> Result<()> {
    if index > size {
        Err(CofferError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}
