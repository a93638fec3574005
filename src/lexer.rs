use crate::token::{Span, Token, TokenKind};

/// On-demand scanner over a borrowed source string.
///
/// The cursor is a byte offset that only moves forward. Scanning never
/// fails: anything the rules below cannot classify comes back as a
/// one-character `Invalid` token for the parser to report.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            done: false,
        }
    }

    /// Skips leading whitespace and returns the next token.
    ///
    /// At end of input this returns `EndOfInput` with an empty lexeme, and
    /// keeps returning it on every further call.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let Some(ch) = self.peek_char() else {
            let span = Span {
                start: self.pos,
                end: self.pos,
            };
            return Token::new(TokenKind::EndOfInput, "", span);
        };

        if ch.is_alphabetic() || ch == '_' {
            return self.identifier();
        }
        if ch.is_ascii_digit() {
            return self.number();
        }

        match ch {
            '=' => return self.single_char(TokenKind::Assign, ch),
            '+' => return self.single_char(TokenKind::Plus, ch),
            ';' => return self.single_char(TokenKind::Semicolon, ch),
            _ => {}
        }

        // Keyword literals are tried after the character-class rules. An
        // alphabetic first character is taken by the identifier rule above,
        // so `begin` and `end` lex as identifiers; the parser matches them
        // by lexeme.
        if self.rest().starts_with("begin") {
            return self.keyword(TokenKind::Begin, "begin".len());
        }
        if self.rest().starts_with("end") {
            return self.keyword(TokenKind::End, "end".len());
        }

        self.invalid(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.bump(ch);
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    fn identifier(&mut self) -> Token<'a> {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.bump(ch);
            } else {
                break;
            }
        }
        self.token(TokenKind::Identifier, start)
    }

    fn number(&mut self) -> Token<'a> {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.bump(ch);
            } else {
                break;
            }
        }
        self.token(TokenKind::Number, start)
    }

    fn single_char(&mut self, kind: TokenKind, ch: char) -> Token<'a> {
        let start = self.pos;
        self.bump(ch);
        self.token(kind, start)
    }

    fn keyword(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let start = self.pos;
        self.pos += len;
        self.token(kind, start)
    }

    fn invalid(&mut self, ch: char) -> Token<'a> {
        let start = self.pos;
        self.bump(ch);
        self.token(TokenKind::Invalid, start)
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'a> {
        Token::new(
            kind,
            &self.input[start..self.pos],
            Span {
                start,
                end: self.pos,
            },
        )
    }
}

/// Yields every token once, ending after the terminating `EndOfInput`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.done = true;
        }
        Some(token)
    }
}

/// Collects the whole token stream, including the final `EndOfInput`.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|token| token.kind).collect()
    }

    fn lexemes(input: &str) -> Vec<&str> {
        tokenize(input).iter().map(|token| token.lexeme).collect()
    }

    #[test]
    fn tokenizes_sample_program() {
        let actual = kinds("begin x = 5 + y; end");
        let expected = vec![
            TokenKind::Identifier, // "begin" lexes as an identifier
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Identifier, // so does "end"
            TokenKind::EndOfInput,
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn keywords_surface_as_identifiers() {
        let tokens = tokenize("begin end");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "begin");
        assert!(tokens[0].is_begin());
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "end");
        assert!(tokens[1].is_end());
    }

    #[test]
    fn whitespace_only_input_is_end_of_input() {
        let mut lexer = Lexer::new(" \t\r\n  ");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EndOfInput);
        assert_eq!(token.lexeme, "");
    }

    #[test]
    fn end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        for _ in 0..3 {
            assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
        }
    }

    #[test]
    fn identifier_runs_are_maximal() {
        assert_eq!(
            lexemes("beginner endpoint _tmp9"),
            vec!["beginner", "endpoint", "_tmp9", ""]
        );
        assert_eq!(
            kinds("beginner endpoint _tmp9"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn number_runs_are_maximal() {
        assert_eq!(
            kinds("123 45x6"),
            vec![
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Identifier,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(lexemes("123 45x6"), vec!["123", "45", "x6", ""]);
    }

    #[test]
    fn single_character_operators() {
        assert_eq!(
            kinds("=+;"),
            vec![
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn invalid_characters_are_single_tokens() {
        assert_eq!(
            kinds("x @ #"),
            vec![
                TokenKind::Identifier,
                TokenKind::Invalid,
                TokenKind::Invalid,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(lexemes("x @ #"), vec!["x", "@", "#", ""]);
    }

    #[test]
    fn invalid_multibyte_character_advances_by_one_char() {
        assert_eq!(lexemes("€5"), vec!["€", "5", ""]);
        assert_eq!(
            kinds("€5"),
            vec![TokenKind::Invalid, TokenKind::Number, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn spans_are_monotonic_and_cover_lexemes() {
        let input = indoc! {"
            begin
                x = 5 + y;
            end
        "};
        let tokens = tokenize(input);
        let mut last_end = 0;
        for token in &tokens {
            assert!(token.span.start >= last_end);
            assert!(token.span.end >= token.span.start);
            assert_eq!(&input[token.span.start..token.span.end], token.lexeme);
            last_end = token.span.end;
        }
    }

    #[test]
    fn iterator_stops_after_end_of_input() {
        let tokens: Vec<_> = Lexer::new("x = 1").collect();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EndOfInput));
    }
}
