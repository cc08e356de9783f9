//! A declaration-level C++ token scanner.
//!
//! The indexer only cares about namespace, class, and enum declarations, so
//! the lexer does just enough: it strips comments and preprocessor lines,
//! consumes string and character literals whole (braces inside them must not
//! confuse brace matching), and hands everything else over as identifiers,
//! integer literals, or punctuation.

use crate::error::{IndexError, Location};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Int,
    Str,
    Char,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub col: u32,
}

impl Token {
    pub fn location(&self) -> Location {
        Location::new(self.line, self.col)
    }

    pub fn is_punct(&self, text: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == text
    }

    pub fn is_ident(&self, text: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == text
    }
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: u32,
    col: u32,
    /// Only whitespace seen so far on the current line. Preprocessor
    /// directives are recognized by a `#` in this state.
    at_line_start: bool,
}

pub fn tokenize(source: &str, file: &Path) -> Result<Vec<Token>, IndexError> {
    let mut scanner = Scanner {
        bytes: source.as_bytes(),
        pos: 0,
        line: 1,
        col: 1,
        at_line_start: true,
    };
    let mut tokens = Vec::new();

    while let Some(byte) = scanner.peek() {
        match byte {
            b' ' | b'\t' | b'\r' | b'\n' => {
                scanner.bump();
            }
            b'/' if scanner.peek_at(1) == Some(b'/') => {
                scanner.skip_line();
            }
            b'/' if scanner.peek_at(1) == Some(b'*') => {
                scanner.skip_block_comment(file)?;
            }
            b'#' if scanner.at_line_start => {
                scanner.skip_preprocessor_line();
            }
            b'"' => {
                tokens.push(scanner.scan_quoted(b'"', TokenKind::Str, file)?);
            }
            b'\'' => {
                tokens.push(scanner.scan_quoted(b'\'', TokenKind::Char, file)?);
            }
            b if b.is_ascii_digit() => {
                tokens.push(scanner.scan_number());
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                tokens.push(scanner.scan_ident());
            }
            _ => {
                tokens.push(scanner.scan_punct());
            }
        }
    }

    Ok(tokens)
}

impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
            self.col = 1;
            self.at_line_start = true;
        } else {
            self.col += 1;
            if !matches!(byte, b' ' | b'\t' | b'\r') {
                self.at_line_start = false;
            }
        }
        Some(byte)
    }

    fn location(&self) -> Location {
        Location::new(self.line, self.col)
    }

    fn skip_line(&mut self) {
        while let Some(byte) = self.peek() {
            if byte == b'\n' {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self, file: &Path) -> Result<(), IndexError> {
        let start = self.location();
        self.bump();
        self.bump();
        loop {
            match self.peek() {
                Some(b'*') if self.peek_at(1) == Some(b'/') => {
                    self.bump();
                    self.bump();
                    return Ok(());
                }
                Some(_) => {
                    self.bump();
                }
                None => {
                    return Err(IndexError::Lex {
                        file: file.to_path_buf(),
                        location: start,
                        message: "unterminated block comment".to_string(),
                    });
                }
            }
        }
    }

    /// Skip a whole preprocessor directive, honoring `\` line continuations.
    /// Includes are never resolved; `#include "ignore_enums.hpp"` and friends
    /// are simply dropped from the token stream.
    fn skip_preprocessor_line(&mut self) {
        loop {
            match self.peek() {
                Some(b'\\') if self.peek_at(1) == Some(b'\n') => {
                    self.bump();
                    self.bump();
                }
                Some(b'\n') | None => return,
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn scan_quoted(
        &mut self,
        quote: u8,
        kind: TokenKind,
        file: &Path,
    ) -> Result<Token, IndexError> {
        let (line, col) = (self.line, self.col);
        let start_location = self.location();
        let start = self.pos;
        self.bump();
        loop {
            match self.peek() {
                Some(b'\\') => {
                    self.bump();
                    self.bump();
                }
                Some(b) if b == quote => {
                    self.bump();
                    break;
                }
                Some(b'\n') | None => {
                    return Err(IndexError::Lex {
                        file: file.to_path_buf(),
                        location: start_location,
                        message: "unterminated literal".to_string(),
                    });
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
        Ok(Token {
            kind,
            text: String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned(),
            line,
            col,
        })
    }

    /// Integer literals: decimal, hex, octal, binary, with `'` digit
    /// separators and letter suffixes. Value interpretation happens in the
    /// parser; the lexer only delimits the token.
    fn scan_number(&mut self) -> Token {
        let (line, col) = (self.line, self.col);
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_alphanumeric() || byte == b'\'' {
                self.bump();
            } else {
                break;
            }
        }
        Token {
            kind: TokenKind::Int,
            text: String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned(),
            line,
            col,
        }
    }

    fn scan_ident(&mut self) -> Token {
        let (line, col) = (self.line, self.col);
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_alphanumeric() || byte == b'_' {
                self.bump();
            } else {
                break;
            }
        }
        Token {
            kind: TokenKind::Ident,
            text: String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned(),
            line,
            col,
        }
    }

    /// Single-character punctuation, except `::` which the parser needs as
    /// one token for compact namespace declarations.
    fn scan_punct(&mut self) -> Token {
        let (line, col) = (self.line, self.col);
        let byte = self.bump().unwrap_or(b'?');
        let text = if byte == b':' && self.peek() == Some(b':') {
            self.bump();
            "::".to_string()
        } else {
            (byte as char).to_string()
        };
        Token {
            kind: TokenKind::Punct,
            text,
            line,
            col,
        }
    }
}
