//! TinyC Parser
//!
//! Parses a TinyC token sequence into an Abstract Syntax Tree using
//! recursive descent. Parsing is fail-fast: the first syntax error aborts
//! the parse and no tree is returned.
//!
//! # Example
//!
//! ```
//! use tinyc_parser::{NodeKind, Parser};
//! use tinyc_token::{Token, TokenKind};
//!
//! let tokens = vec![
//!     Token::symbol(TokenKind::Int),
//!     Token::new(TokenKind::Identifier, "x"),
//!     Token::symbol(TokenKind::Semicolon),
//!     Token::eof(),
//! ];
//! let program = Parser::new(tokens).parse().unwrap();
//! assert_eq!(program.children[0].kind, NodeKind::Declaration);
//! ```

pub mod ast;
pub mod parser;

pub use ast::{Node, NodeKind};
pub use parser::{Parser, MAX_NESTING};

/// Syntax error with the offending token.
///
/// `found` is the token's literal text (empty at end of input) and
/// `position` its index in the token sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Syntax error at token {position}: {message}, found '{found}'")]
pub struct SyntaxError {
    pub message: String,
    pub found: String,
    pub position: usize,
}
