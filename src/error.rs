//! Error types for the semnet library.
//!
//! All fallible construction-time operations return [`SemnetError`] through
//! the [`Result`] alias. Query-time misses (unknown ids, mismatched word
//! categories, empty filter inputs) are not errors; those surface as `None`
//! or empty collections from the query APIs.
//!
//! # Examples
//!
//! ```
//! use semnet::error::{Result, SemnetError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SemnetError::graph("duplicate synset id 42"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for semnet operations.
#[derive(Error, Debug)]
pub enum SemnetError {
    /// I/O errors (frequency list files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Graph construction errors (duplicate ids, dangling references,
    /// invariant violations).
    #[error("Graph error: {0}")]
    Graph(String),

    /// Frequency table errors (malformed `word count` lines).
    #[error("Frequency error: {0}")]
    Frequency(String),

    /// Filter errors other than pattern syntax.
    #[error("Filter error: {0}")]
    Filter(String),

    /// Regex compilation errors from filter patterns.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SemnetError.
pub type Result<T> = std::result::Result<T, SemnetError>;

impl SemnetError {
    /// Create a new graph error.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        SemnetError::Graph(msg.into())
    }

    /// Create a new frequency error.
    pub fn frequency<S: Into<String>>(msg: S) -> Self {
        SemnetError::Frequency(msg.into())
    }

    /// Create a new filter error.
    pub fn filter<S: Into<String>>(msg: S) -> Self {
        SemnetError::Filter(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SemnetError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SemnetError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
