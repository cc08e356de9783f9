//! Recursive-descent declaration scanner.
//!
//! Builds a [`Cursor`] tree out of the token stream. Only namespace, class,
//! struct, and enum declarations become cursors; everything else (function
//! bodies, variables, using-declarations) is skipped with balanced-brace
//! scanning so nesting stays correct.

use crate::ast::{Cursor, CursorKind};
use crate::error::{IndexError, Location};
use crate::lexer::{Token, TokenKind};
use std::path::{Path, PathBuf};

pub fn parse_translation_unit(tokens: Vec<Token>, file: &Path) -> Result<Cursor, IndexError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        file: file.to_path_buf(),
    };
    let mut root = Cursor::new(
        CursorKind::TranslationUnit,
        file.display().to_string(),
        Location::new(1, 1),
    );
    parser.parse_items(&mut root.children, false)?;
    Ok(root)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    file: PathBuf,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    fn eat_punct(&mut self, text: &str) -> bool {
        if self.peek().is_some_and(|t| t.is_punct(text)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn last_location(&self) -> Location {
        self.tokens
            .last()
            .map(Token::location)
            .unwrap_or(Location::new(1, 1))
    }

    fn error(&self, location: Location, message: impl Into<String>) -> IndexError {
        IndexError::Parse {
            file: self.file.clone(),
            location,
            message: message.into(),
        }
    }

    /// Parse declarations into `children` until end of input, or until the
    /// closing `}` of the enclosing scope when `in_scope` is set.
    fn parse_items(&mut self, children: &mut Vec<Cursor>, in_scope: bool) -> Result<(), IndexError> {
        loop {
            let Some(token) = self.peek() else {
                if in_scope {
                    return Err(self.error(self.last_location(), "unbalanced braces at end of file"));
                }
                return Ok(());
            };

            if token.is_punct("}") {
                if in_scope {
                    self.pos += 1;
                    return Ok(());
                }
                let location = token.location();
                return Err(self.error(location, "unexpected `}`"));
            }

            if token.kind == TokenKind::Ident {
                match token.text.as_str() {
                    "namespace" => {
                        self.parse_namespace(children)?;
                        continue;
                    }
                    "enum" => {
                        self.parse_enum(children)?;
                        continue;
                    }
                    "template" => {
                        self.pos += 1;
                        self.skip_template_header()?;
                        continue;
                    }
                    "class" | "struct" => {
                        self.parse_record(children)?;
                        continue;
                    }
                    // Access specifiers inside class bodies would otherwise be
                    // swallowed as the start of a skipped statement, taking the
                    // declarations after them along.
                    "public" | "private" | "protected"
                        if self.peek_at(1).is_some_and(|t| t.is_punct(":")) =>
                    {
                        self.pos += 2;
                        continue;
                    }
                    _ => {}
                }
            }

            self.skip_statement();
        }
    }

    /// `namespace a { ... }` and C++17 compact `namespace a::b { ... }`; the
    /// compact form produces one nested Namespace cursor per segment.
    fn parse_namespace(&mut self, children: &mut Vec<Cursor>) -> Result<(), IndexError> {
        let keyword = self.bump().expect("namespace keyword");

        let mut segments: Vec<(String, Location)> = Vec::new();
        while let Some(token) = self.peek() {
            if token.kind == TokenKind::Ident {
                segments.push((token.text.clone(), token.location()));
                self.pos += 1;
                if !self.eat_punct("::") {
                    break;
                }
            } else {
                break;
            }
        }

        if segments.is_empty() {
            // Anonymous namespace.
            segments.push((String::new(), keyword.location()));
        }

        if !self.eat_punct("{") {
            let location = self.peek().map(Token::location).unwrap_or(self.last_location());
            return Err(self.error(location, "expected `{` after namespace name"));
        }

        let (innermost_name, innermost_location) = segments.pop().expect("at least one segment");
        let mut innermost = Cursor::new(CursorKind::Namespace, innermost_name, innermost_location);
        self.parse_items(&mut innermost.children, true)?;

        // Fold compact segments back outermost-first.
        let mut cursor = innermost;
        while let Some((name, location)) = segments.pop() {
            let mut outer = Cursor::new(CursorKind::Namespace, name, location);
            outer.children.push(cursor);
            cursor = outer;
        }
        children.push(cursor);
        Ok(())
    }

    /// `enum [class|struct] Name [: underlying] { constants } [;]`. An opaque
    /// declaration (`enum class Name;`) yields an EnumDecl with no children.
    fn parse_enum(&mut self, children: &mut Vec<Cursor>) -> Result<(), IndexError> {
        let keyword = self.bump().expect("enum keyword");

        if self
            .peek()
            .is_some_and(|t| t.is_ident("class") || t.is_ident("struct"))
        {
            self.pos += 1;
        }

        let Some(name_token) = self.peek().cloned() else {
            return Err(self.error(keyword.location(), "expected enum name"));
        };
        if name_token.kind != TokenKind::Ident {
            return Err(self.error(name_token.location(), "expected enum name"));
        }
        self.pos += 1;

        let location = name_token.location();
        let mut decl = Cursor::new(CursorKind::EnumDecl, name_token.text, location);

        // Underlying type: skip tokens until the body or a terminating `;`.
        if self.eat_punct(":") {
            while let Some(token) = self.peek() {
                if token.is_punct("{") || token.is_punct(";") {
                    break;
                }
                self.pos += 1;
            }
        }

        if self.eat_punct("{") {
            self.parse_enum_constants(&mut decl)?;
        }
        self.eat_punct(";");

        children.push(decl);
        Ok(())
    }

    /// Constant list with C++ value semantics: first constant defaults to 0,
    /// each later one is previous + 1 unless an explicit literal sets it.
    fn parse_enum_constants(&mut self, decl: &mut Cursor) -> Result<(), IndexError> {
        let mut next_value: i64 = 0;
        loop {
            if self.eat_punct("}") {
                return Ok(());
            }
            let Some(name_token) = self.peek().cloned() else {
                return Err(self.error(self.last_location(), "unterminated enum body"));
            };
            if name_token.kind != TokenKind::Ident {
                return Err(self.error(name_token.location(), "expected enum constant name"));
            }
            self.pos += 1;

            let value = if self.eat_punct("=") {
                self.parse_initializer(&name_token)?
            } else {
                next_value
            };
            next_value = value + 1;

            let mut constant = Cursor::new(
                CursorKind::EnumConstantDecl,
                name_token.text.clone(),
                name_token.location(),
            );
            constant.value = Some(value);
            decl.children.push(constant);

            if self.eat_punct(",") {
                continue;
            }
            if self.eat_punct("}") {
                return Ok(());
            }
            let location = self.peek().map(Token::location).unwrap_or(self.last_location());
            return Err(self.error(location, "expected `,` or `}` after enum constant"));
        }
    }

    /// Only optionally-signed integer literals are supported; libclang would
    /// evaluate arbitrary constant expressions, this scanner refuses them.
    fn parse_initializer(&mut self, name_token: &Token) -> Result<i64, IndexError> {
        let unsupported = |parser: &Parser| IndexError::UnsupportedInitializer {
            file: parser.file.clone(),
            location: name_token.location(),
            constant: name_token.text.clone(),
        };

        let mut negative = false;
        if self.eat_punct("-") {
            negative = true;
        } else {
            self.eat_punct("+");
        }

        let Some(literal) = self.peek().cloned() else {
            return Err(unsupported(self));
        };
        if literal.kind != TokenKind::Int {
            return Err(unsupported(self));
        }
        self.pos += 1;

        // The initializer must be the whole expression.
        if !self.peek().is_some_and(|t| t.is_punct(",") || t.is_punct("}")) {
            return Err(unsupported(self));
        }

        let magnitude = parse_int_literal(&literal.text).ok_or_else(|| unsupported(self))?;
        Ok(if negative { -magnitude } else { magnitude })
    }

    /// `class`/`struct` with an optional body. Forward declarations produce
    /// no cursor; definitions produce a ClassDecl/StructDecl whose children
    /// include nested enums (visible to dump-ast, excluded by the indexer).
    fn parse_record(&mut self, children: &mut Vec<Cursor>) -> Result<(), IndexError> {
        let keyword = self.bump().expect("class or struct keyword");
        let kind = if keyword.text == "class" {
            CursorKind::ClassDecl
        } else {
            CursorKind::StructDecl
        };

        let name = match self.peek() {
            Some(token) if token.kind == TokenKind::Ident => {
                let token = token.clone();
                self.pos += 1;
                token
            }
            // Anonymous struct or `class {` in a skipped context.
            _ => Token {
                kind: TokenKind::Ident,
                text: String::new(),
                line: keyword.line,
                col: keyword.col,
            },
        };

        // Base clauses, `final`, attributes: skip to the body or terminator.
        loop {
            match self.peek() {
                Some(token) if token.is_punct("{") => break,
                Some(token) if token.is_punct(";") => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(token) if token.is_punct("<") => {
                    self.skip_angle_brackets()?;
                }
                Some(_) => {
                    self.pos += 1;
                }
                None => return Ok(()),
            }
        }
        self.pos += 1;

        let location = name.location();
        let mut decl = Cursor::new(kind, name.text, location);
        self.parse_items(&mut decl.children, true)?;
        self.eat_punct(";");
        children.push(decl);
        Ok(())
    }

    /// Skip `<...>` after `template`, tracking nesting depth.
    fn skip_template_header(&mut self) -> Result<(), IndexError> {
        let Some(open) = self.peek() else {
            return Ok(());
        };
        if !open.is_punct("<") {
            return Ok(());
        }
        self.skip_angle_brackets()
    }

    fn skip_angle_brackets(&mut self) -> Result<(), IndexError> {
        let open_location = self.peek().map(Token::location).unwrap_or(self.last_location());
        self.pos += 1;
        let mut depth = 1usize;
        while depth > 0 {
            let Some(token) = self.bump() else {
                return Err(self.error(open_location, "unterminated template parameter list"));
            };
            if token.is_punct("<") {
                depth += 1;
            } else if token.is_punct(">") {
                depth -= 1;
            }
        }
        Ok(())
    }

    /// Skip an uninteresting declaration or statement: up to `;` at the
    /// current nesting level, or over one balanced `{ ... }` block. A `}`
    /// belonging to the enclosing scope is left for the caller.
    fn skip_statement(&mut self) {
        while let Some(token) = self.peek() {
            if token.is_punct(";") {
                self.pos += 1;
                return;
            }
            if token.is_punct("}") {
                return;
            }
            if token.is_punct("{") {
                self.pos += 1;
                let mut depth = 1usize;
                while depth > 0 {
                    let Some(inner) = self.bump() else {
                        return;
                    };
                    if inner.is_punct("{") {
                        depth += 1;
                    } else if inner.is_punct("}") {
                        depth -= 1;
                    }
                }
                // `struct { ... } x;` style trailers are picked up as the
                // next skipped statement.
                return;
            }
            self.pos += 1;
        }
    }
}

/// Integer literal forms: decimal, `0x` hex, `0b` binary, leading-zero octal,
/// with `'` separators and `u`/`l` suffixes.
fn parse_int_literal(text: &str) -> Option<i64> {
    let cleaned: String = text.chars().filter(|c| *c != '\'').collect();
    let trimmed = cleaned.trim_end_matches(['u', 'U', 'l', 'L']);
    if trimmed.is_empty() {
        return None;
    }
    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok();
    }
    if let Some(bin) = trimmed.strip_prefix("0b").or_else(|| trimmed.strip_prefix("0B")) {
        return i64::from_str_radix(bin, 2).ok();
    }
    if trimmed.len() > 1 && trimmed.starts_with('0') {
        return i64::from_str_radix(&trimmed[1..], 8).ok();
    }
    trimmed.parse().ok()
}
