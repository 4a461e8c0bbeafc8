//! Error types for slab operations.

use core::fmt;

/// Error returned when an insert cannot be completed.
///
/// Carries the rejected value so the caller can recover it, in the same
/// way a bounded queue hands back what it could not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError<T> {
    /// The target category does not exist.
    InvalidCategory(T),
    /// The slab is at the id type's maximum capacity and cannot grow.
    Full(T),
}

impl<T> InsertError<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::InvalidCategory(value) => value,
            InsertError::Full(value) => value,
        }
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::InvalidCategory(_) => write!(f, "category does not exist"),
            InsertError::Full(_) => write!(f, "slab is at maximum capacity"),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for InsertError<T> {}

/// Error returned when a record cannot be reassigned to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryError {
    /// The id does not refer to a live record.
    InvalidId {
        /// The offending id.
        id: usize,
    },
    /// The target category does not exist.
    InvalidCategory {
        /// The requested category.
        category: usize,
        /// Number of categories in the slab.
        categories: usize,
    },
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryError::InvalidId { id } => write!(f, "id {} is not live", id),
            CategoryError::InvalidCategory {
                category,
                categories,
            } => write!(
                f,
                "category {} out of range (slab has {})",
                category, categories
            ),
        }
    }
}

impl std::error::Error for CategoryError {}
