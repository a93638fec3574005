#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Begin,
    End,
    Identifier,
    Number,

    // Operators
    Assign,    // =
    Plus,      // +
    Semicolon, // ;

    // Anything the lexer could not classify, one character at a time
    Invalid,

    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// True when this token plays the role of the `begin` keyword.
    ///
    /// The lexer classifies any alphabetic run as an identifier before the
    /// keyword literals are tried, so `begin` and `end` arrive as
    /// `Identifier` tokens; keyword-ness is decided on the lexeme text.
    pub fn is_begin(&self) -> bool {
        self.kind == TokenKind::Begin
            || (self.kind == TokenKind::Identifier && self.lexeme == "begin")
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
            || (self.kind == TokenKind::Identifier && self.lexeme == "end")
    }

    pub fn is_keyword(&self) -> bool {
        self.is_begin() || self.is_end()
    }

    /// True when this token can open a statement: an identifier that is not
    /// one of the keyword lexemes.
    pub fn starts_statement(&self) -> bool {
        self.kind == TokenKind::Identifier && !self.is_keyword()
    }
}
