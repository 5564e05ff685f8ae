//! TinyC Tokens
//!
//! The token contract between a TinyC lexer and the parser: token kinds,
//! tokens, and a reader for the line-oriented token listing format.
//!
//! # Example
//!
//! ```
//! use tinyc_token::ListingReader;
//!
//! let tokens = ListingReader::read("").unwrap();
//! assert_eq!(tokens.len(), 1); // Just EOF
//! ```

pub mod listing;
pub mod token;

pub use listing::ListingReader;
pub use token::{Token, TokenKind, UnknownTokenKind};

/// Token listing error with the offending line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Listing error at line {line}: {message}")]
pub struct ListingError {
    pub message: String,
    pub line: usize,
}
