//! Recursive-descent recognizer for the block language.
//!
//! ```text
//! program   := 'begin' stmt_list 'end'
//! stmt_list := stmt ';' stmt_list | ε
//! stmt      := identifier '=' expr
//! expr      := term ('+' expr)?
//! term      := identifier | number
//! ```
//!
//! The parser holds a single lookahead token and pulls the next one from the
//! lexer only when the current one is consumed. Recognition stops at the
//! first mismatch; the resulting [`ParseError`] names the expected construct
//! and the lexeme that was found instead. No tree is built.

use thiserror::Error;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Printed by callers when the input is accepted by the grammar.
pub const ACCEPTANCE_MESSAGE: &str = "The program is generated by the grammar";

/// First grammar mismatch found in the input. `found` is the lexeme of the
/// offending token, empty when the offense is end of input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Syntax Error: Expected 'begin', found {found}")]
    ExpectedBegin { found: String },
    #[error("Syntax Error: Expected 'end', found {found}")]
    ExpectedEnd { found: String },
    #[error("Syntax Error: Expected ';', found {found}")]
    ExpectedSemicolon { found: String },
    #[error("Syntax Error: Expected '=', found {found}")]
    ExpectedAssign { found: String },
    #[error("Syntax Error: Expected identifier, found {found}")]
    ExpectedIdentifier { found: String },
    #[error("Syntax Error: Expected identifier or number, found {found}")]
    ExpectedTerm { found: String },
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Runs the `program` production over the token stream.
    pub fn parse(mut self) -> ParseResult<()> {
        self.program()
    }

    // program := 'begin' stmt_list 'end'
    fn program(&mut self) -> ParseResult<()> {
        if !self.current.is_begin() {
            return Err(ParseError::ExpectedBegin {
                found: self.found(),
            });
        }
        self.advance();
        self.stmt_list()?;
        if !self.current.is_end() {
            return Err(ParseError::ExpectedEnd {
                found: self.found(),
            });
        }
        Ok(())
    }

    // stmt_list := stmt ';' stmt_list | ε
    //
    // Iterative rather than self-recursive, so statement count never grows
    // the call stack. Exits without error on any token that cannot open a
    // statement; `begin end` is a valid zero-statement program.
    fn stmt_list(&mut self) -> ParseResult<()> {
        while self.current.starts_statement() {
            self.stmt()?;
            if self.current.kind != TokenKind::Semicolon {
                return Err(ParseError::ExpectedSemicolon {
                    found: self.found(),
                });
            }
            self.advance();
        }
        Ok(())
    }

    // stmt := identifier '=' expr
    fn stmt(&mut self) -> ParseResult<()> {
        if !self.current.starts_statement() {
            return Err(ParseError::ExpectedIdentifier {
                found: self.found(),
            });
        }
        self.advance();
        if self.current.kind != TokenKind::Assign {
            return Err(ParseError::ExpectedAssign {
                found: self.found(),
            });
        }
        self.advance();
        self.expr()
    }

    // expr := term ('+' expr)?
    //
    // Single operator, so the right-recursive rule flattens to a loop.
    fn expr(&mut self) -> ParseResult<()> {
        self.term()?;
        while self.current.kind == TokenKind::Plus {
            self.advance();
            self.term()?;
        }
        Ok(())
    }

    // term := identifier | number
    //
    // The keyword lexemes are not terms; `x = end` is a mismatch, not a
    // variable reference.
    fn term(&mut self) -> ParseResult<()> {
        match self.current.kind {
            TokenKind::Identifier | TokenKind::Number if !self.current.is_keyword() => {
                self.advance();
                Ok(())
            }
            _ => Err(ParseError::ExpectedTerm {
                found: self.found(),
            }),
        }
    }

    /// Swaps the lookahead for the next token from the lexer.
    fn advance(&mut self) -> Token<'a> {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    fn found(&self) -> String {
        self.current.lexeme.to_string()
    }
}

/// Recognizes `input` against the grammar, reporting the first mismatch.
pub fn parse(input: &str) -> ParseResult<()> {
    Parser::new(input).parse()
}
