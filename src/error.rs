//! Error types for the Verdict library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`VerdictError`] enum.
//!
//! # Examples
//!
//! ```
//! use verdict::error::{Result, VerdictError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VerdictError::invalid_input("Empty dataset"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Verdict operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum VerdictError {
    /// I/O errors (snapshot files, dataset files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid constructor or learning input (empty dataset, malformed entry)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Analysis-related errors (tokenization failures)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Inconsistent or unusable persisted state
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// Result type alias for operations that may fail with VerdictError.
pub type Result<T> = std::result::Result<T, VerdictError>;

impl VerdictError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        VerdictError::InvalidInput(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VerdictError::Analysis(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        VerdictError::Snapshot(msg.into())
    }
}
