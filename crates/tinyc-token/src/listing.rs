//! Token listing reader.
//!
//! A token listing is the line-oriented form in which a lexer hands its
//! output to the parser across a process boundary:
//!
//! ```text
//! # int a ;
//! int
//! identifier a
//! semicolon
//! eof
//! ```
//!
//! Each line is `<kind> [<text>]`. Keywords and punctuation may omit their
//! text. Blank lines and `#` comments are skipped, and a missing trailing
//! `eof` is supplied.

use crate::token::{Token, TokenKind};
use crate::ListingError;

/// Reads a token listing into a token sequence.
///
/// [`ListingReader::read`] is the only entry point:
///
/// ```compile_fail
/// let reader = tinyc_token::ListingReader::new("int");
/// ```
pub struct ListingReader<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    tokens: Vec<Token>,
    seen_eof: bool,
}

impl<'a> ListingReader<'a> {
    fn new(listing: &'a str) -> Self {
        Self {
            lines: listing.lines().enumerate(),
            tokens: Vec::new(),
            seen_eof: false,
        }
    }

    /// Read a whole listing into tokens, always ending with `eof`.
    pub fn read(listing: &str) -> Result<Vec<Token>, ListingError> {
        let mut reader = ListingReader::new(listing);
        reader.read_lines()?;
        if !reader.seen_eof {
            reader.tokens.push(Token::eof());
        }
        Ok(reader.tokens)
    }

    fn read_lines(&mut self) -> Result<(), ListingError> {
        while let Some((index, line)) = self.lines.next() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line_number = index + 1;
            if self.seen_eof {
                return Err(error(line_number, "Token after 'eof'"));
            }

            let token = read_token(line, line_number)?;
            self.seen_eof = token.is_eof();
            self.tokens.push(token);
        }
        Ok(())
    }
}

fn read_token(line: &str, line_number: usize) -> Result<Token, ListingError> {
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let kind: TokenKind = name
        .parse()
        .map_err(|e: crate::UnknownTokenKind| error(line_number, e.to_string()))?;

    if !rest.is_empty() {
        return Ok(Token::new(kind, rest));
    }

    match kind.canonical_text() {
        Some(text) => Ok(Token::new(kind, text)),
        None => Err(error(
            line_number,
            format!("Missing text for '{kind}' token"),
        )),
    }
}

fn error(line: usize, message: impl Into<String>) -> ListingError {
    ListingError {
        message: message.into(),
        line,
    }
}
