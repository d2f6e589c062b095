//! Error types shared by every ALGOVIZ crate.

use thiserror::Error;

/// Errors raised by collections, the grid model and configuration.
///
/// Running out of paths and being cancelled are normal outcomes and are
/// reported through return values, never through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgovizError {
    /// `dequeue`/`pop`/`peek` on a collection with no elements
    #[error("attempted to {operation} an empty {collection}")]
    EmptyCollection {
        collection: &'static str,
        operation: &'static str,
    },

    /// Grid coordinates outside the `size x size` board
    #[error("position ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Invalid constructor argument or unknown name
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration failed validation
    #[error("configuration error: {0}")]
    Config(String),
}

impl AlgovizError {
    pub(crate) fn empty(collection: &'static str, operation: &'static str) -> Self {
        AlgovizError::EmptyCollection {
            collection,
            operation,
        }
    }

    /// Shorthand for [`AlgovizError::Config`]
    pub fn config(message: impl Into<String>) -> Self {
        AlgovizError::Config(message.into())
    }

    /// Shorthand for [`AlgovizError::InvalidInput`]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AlgovizError::InvalidInput(message.into())
    }
}

/// Result alias used across ALGOVIZ
pub type AlgovizResult<T> = Result<T, AlgovizError>;
