//! Errors that can occur when reading or writing the string-array exchange format.
//!
//! Core trie operations never fail; only the serialization boundary does.

use thiserror::Error;

/// Errors produced by the serialization boundary of the trie.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is not a well-formed array of strings
    #[error("malformed string array at line {line}, column {column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },

    /// The input ended inside the array or inside a string
    #[error("unexpected end of input at line {line}, column {column}")]
    UnexpectedEof { line: usize, column: usize },

    /// The trie could not be written out
    #[error("failed to encode trie: {0}")]
    Encode(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let (line, column) = (err.line(), err.column());
        match err.classify() {
            Category::Eof => Error::UnexpectedEof { line, column },
            Category::Syntax | Category::Data => Error::Malformed {
                line,
                column,
                message: err.to_string(),
            },
            Category::Io => Error::Encode(err.to_string()),
        }
    }
}
