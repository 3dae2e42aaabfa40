use std::sync::Arc;

use log::trace;

use crate::{MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Pull-based scanner over a single source buffer.
///
/// Each call to [`Lexer::next_token`] consumes input and returns exactly one
/// token. Once the input is exhausted every further call returns `EOF`.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    /// Offset of `ch`
    position: usize,
    /// Offset of the byte after `ch`
    read_position: usize,
    /// Byte under examination, `0` once past the end
    ch: u8,
    file: Arc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer::with_file(source, None)
    }

    pub fn with_file(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    pub fn file(&self) -> &Arc<String> {
        &self.file
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let kind = match self.ch {
            b'=' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::Equal
            }
            b'=' => TokenKind::Assign,
            b'!' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::NotEqual
            }
            b'!' => TokenKind::Bang,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'/' => TokenKind::Slash,
            b'*' => TokenKind::Asterisk,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            0 if self.at_eof() => {
                return MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    MK_SPAN!(start, start, self.file)
                );
            }
            ch if is_letter(ch) => {
                let literal = self.read_while(is_letter);
                let token = MK_TOKEN!(
                    lookup_ident(&literal),
                    literal,
                    MK_SPAN!(start, self.position, self.file)
                );
                trace!("lexed {}", token);
                return token;
            }
            ch if is_digit(ch) => {
                let literal = self.read_while(is_digit);
                let token = MK_TOKEN!(
                    TokenKind::Integer,
                    literal,
                    MK_SPAN!(start, self.position, self.file)
                );
                trace!("lexed {}", token);
                return token;
            }
            _ => {
                // Swallow the whole character so the cursor stays on a char boundary.
                let width = self.source[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                for _ in 1..width {
                    self.read_char();
                }
                TokenKind::Illegal
            }
        };

        self.read_char();
        let token = MK_TOKEN!(
            kind,
            self.source[start..self.position].to_string(),
            MK_SPAN!(start, self.position, self.file)
        );
        trace!("lexed {}", token);
        token
    }

    /// Returns true once every byte of the source has been consumed.
    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_while(&mut self, accept: fn(u8) -> bool) -> String {
        let start = self.position;
        while accept(self.ch) {
            self.read_char();
        }
        self.source[start..self.position].to_string()
    }

    fn read_char(&mut self) {
        self.ch = self
            .source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0);
        self.position = self.read_position.min(self.source.len());
        if self.read_position < self.source.len() {
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, the first `EOF`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            self.finished = true;
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Lexes the whole source, including the terminating `EOF` token.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::with_file(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
