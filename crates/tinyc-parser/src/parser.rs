//! Statement and expression parser for TinyC.
//!
//! Grammar:
//!
//! ```text
//! program     = statements EOF
//! statements  = statement*
//! statement   = declaration | assignment | conditional
//! declaration = "int" IDENT ";"
//! assignment  = IDENT "=" expression ";"
//! conditional = "if" "(" condition ")" "{" statements "}"
//! condition   = expression ( "==" expression )?
//! expression  = term ( ( "+" | "-" ) term )*
//! term        = NUMBER | IDENT
//! ```
//!
//! Every rule either consumes at least one token or fails, so a parse is
//! linear in the number of tokens.

use crate::ast::{Node, NodeKind};
use crate::SyntaxError;
use tinyc_token::{Token, TokenKind};
use tracing::{debug, trace};

/// Read past the end of the token sequence.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    text: String::new(),
};

/// Deepest conditional nesting accepted. Each level costs a few stack
/// frames, so this bounds stack use regardless of input.
pub const MAX_NESTING: usize = 256;

/// TinyC parser.
///
/// Converts a flat token sequence into a statement-list `Node` using
/// recursive descent. The sequence should end with an `Eof` token; reads
/// past its end behave as if it did.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Create a new parser for the given tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse the whole token sequence into a statement list.
    pub fn parse(mut self) -> Result<Node, SyntaxError> {
        let result = self.parse_statements(TokenKind::Eof);

        match &result {
            Ok(program) => debug!(statements = program.children.len(), "parsed program"),
            Err(e) => debug!(position = e.position, found = %e.found, "{}", e.message),
        }

        result
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Parse statements until `terminator` (or end of input) is the lookahead.
    /// The terminator itself is left for the caller.
    fn parse_statements(&mut self, terminator: TokenKind) -> Result<Node, SyntaxError> {
        let mut statements = Vec::new();

        while self.current_token().kind != terminator && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(Node::statement_list(statements))
    }

    fn parse_statement(&mut self) -> Result<Node, SyntaxError> {
        let kind = self.current_token().kind;
        trace!(position = self.pos, %kind, "statement");

        match kind {
            TokenKind::Int => self.parse_variable_declaration(),
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::If => self.parse_conditional(),
            _ => Err(self.error("Unexpected token")),
        }
    }

    /// Parse `int x;`
    fn parse_variable_declaration(&mut self) -> Result<Node, SyntaxError> {
        let keyword = self.current_token().text.clone();
        self.advance(); // consume `int`

        let name = self.expect(TokenKind::Identifier, "Expected identifier after 'int'")?;
        self.expect(
            TokenKind::Semicolon,
            "Expected ';' after variable declaration",
        )?;

        Ok(Node::new(
            NodeKind::Declaration,
            Some(keyword),
            vec![Node::identifier(name)],
        ))
    }

    /// Parse `x = expr;`
    fn parse_assignment(&mut self) -> Result<Node, SyntaxError> {
        let name = self.expect(TokenKind::Identifier, "Expected identifier")?;
        let op = self.expect(TokenKind::Assign, "Expected '=' after identifier")?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "Expected ';' after expression")?;

        Ok(Node::new(
            NodeKind::Assignment,
            Some(op),
            vec![Node::identifier(name), value],
        ))
    }

    /// Parse a conditional:
    /// ```text
    /// if ( c == 30 ) {
    ///     c = c + 1;
    /// }
    /// ```
    fn parse_conditional(&mut self) -> Result<Node, SyntaxError> {
        if self.depth == MAX_NESTING {
            return Err(self.error("Conditional nested too deeply"));
        }

        let keyword = self.current_token().text.clone();
        self.advance(); // consume `if`

        self.expect(TokenKind::LParen, "Expected '(' after 'if'")?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::RParen, "Expected ')' after condition")?;

        self.expect(TokenKind::LBrace, "Expected '{' after condition")?;
        self.depth += 1;
        let body = self.parse_statements(TokenKind::RBrace);
        self.depth -= 1;
        let body = body?;
        self.expect(TokenKind::RBrace, "Expected '}' after statements")?;

        Ok(Node::new(NodeKind::If, Some(keyword), vec![condition, body]))
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Equality is non-associative and only valid as a condition.
    fn parse_condition(&mut self) -> Result<Node, SyntaxError> {
        let left = self.parse_expression()?;

        if self.current_token().kind != TokenKind::Equal {
            return Ok(left);
        }

        let op = self.current_token().text.clone();
        self.advance(); // consume `==`
        let right = self.parse_expression()?;

        Ok(Node::binary(NodeKind::Equal, op, left, right))
    }

    /// `+` and `-` share one precedence level and associate left.
    fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_term()?;

        loop {
            let kind = match self.current_token().kind {
                TokenKind::Plus => NodeKind::Plus,
                TokenKind::Minus => NodeKind::Minus,
                _ => break,
            };
            let op = self.current_token().text.clone();
            self.advance(); // consume operator

            let right = self.parse_term()?;
            node = Node::binary(kind, op, node, right);
        }

        Ok(node)
    }

    fn parse_term(&mut self) -> Result<Node, SyntaxError> {
        let kind = match self.current_token().kind {
            TokenKind::Number => NodeKind::Number,
            TokenKind::Identifier => NodeKind::Identifier,
            _ => return Err(self.error("Unexpected token")),
        };

        let text = self.current_token().text.clone();
        self.advance();
        Ok(Node::leaf(kind, text))
    }

    // =========================================================================
    // Token navigation helpers
    // =========================================================================

    fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.current_token().is_eof()
    }

    /// Consume a token of `kind` and return its text, or fail with `message`.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<String, SyntaxError> {
        if self.current_token().kind != kind {
            return Err(self.error(message));
        }

        let text = self.current_token().text.clone();
        self.advance();
        Ok(text)
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError {
            message: message.into(),
            found: self.current_token().text.clone(),
            position: self.pos,
        }
    }
}
