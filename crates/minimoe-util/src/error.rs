//! Internal error types.
//!
//! These cover broken invariants inside the front-end itself (a bad
//! interner index, an out-of-range arena access) — never a malformed
//! input program, which is always reported through `Diagnostic` instead.

use thiserror::Error;

/// Error type for symbol interning operations
#[derive(Debug, Error)]
pub enum SymbolError {
    /// Symbol not found in the interner
    #[error("symbol not found: index {index}")]
    NotFound { index: u32 },
}

/// Error type for index vector operations
#[derive(Debug, Error)]
pub enum IndexVecError {
    /// Index out of bounds
    #[error("Index out of bounds: index {index}, length {length}")]
    OutOfBounds { index: usize, length: usize },

    /// Invalid index
    #[error("Invalid index: {0}")]
    InvalidIndex(String),
}

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

/// Result type alias for index vector operations
pub type IndexVecResult<T> = std::result::Result<T, IndexVecError>;
