use std::fmt;
use std::str::FromStr;

/// Token classification for TinyC source.
///
/// The set is closed: every token an upstream lexer can hand to the parser
/// is one of these kinds. Parentheses and braces are four distinct kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Int,
    If,

    // Literals
    Identifier,
    Number,

    // Operators
    Assign, // =
    Plus,   // +
    Minus,  // -
    Equal,  // ==

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,

    // End of input
    Eof,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 14] = [
        TokenKind::Int,
        TokenKind::If,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Equal,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Semicolon,
        TokenKind::Eof,
    ];

    /// Name of the kind in a token listing.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Int => "int",
            TokenKind::If => "if",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Assign => "assign",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Equal => "equal",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBrace => "lbrace",
            TokenKind::RBrace => "rbrace",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Eof => "eof",
        }
    }

    /// The fixed lexeme for keywords and punctuation.
    ///
    /// `None` for identifiers and numbers, whose text varies.
    pub fn canonical_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Int => Some("int"),
            TokenKind::If => Some("if"),
            TokenKind::Identifier | TokenKind::Number => None,
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Equal => Some("=="),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Eof => Some(""),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no token kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind '{0}'")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

/// A token produced by the TinyC lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input marker.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Build a keyword or punctuation token with its fixed lexeme.
    ///
    /// Identifiers and numbers get empty text; use [`Token::new`] for those.
    pub fn symbol(kind: TokenKind) -> Self {
        Self::new(kind, kind.canonical_text().unwrap_or_default())
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
