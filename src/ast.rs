//! Cursor tree for parsed declarations.
//!
//! The shape deliberately mirrors a libclang cursor: a kind, a spelling, a
//! source location, and children. That keeps the indexer's walk and the
//! `dump-ast` output recognizable to anyone who has pointed clang tooling at
//! the same sources.

use crate::error::Location;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CursorKind {
    TranslationUnit,
    Namespace,
    ClassDecl,
    StructDecl,
    EnumDecl,
    EnumConstantDecl,
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CursorKind::TranslationUnit => "TranslationUnit",
            CursorKind::Namespace => "Namespace",
            CursorKind::ClassDecl => "ClassDecl",
            CursorKind::StructDecl => "StructDecl",
            CursorKind::EnumDecl => "EnumDecl",
            CursorKind::EnumConstantDecl => "EnumConstantDecl",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub kind: CursorKind,
    pub spelling: String,
    pub line: u32,
    pub col: u32,
    /// Computed numeric value, enum constants only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    pub children: Vec<Cursor>,
}

impl Cursor {
    pub fn new(kind: CursorKind, spelling: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            line: location.line,
            col: location.col,
            value: None,
            children: Vec::new(),
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.col)
    }

    /// Indented `kind: spelling: [line=.., col=..]` rendering, two spaces per
    /// depth level.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.dump_at(out, 0)
    }

    fn dump_at<W: Write>(&self, out: &mut W, depth: usize) -> io::Result<()> {
        writeln!(
            out,
            "{:indent$}{}: {}: [line={}, col={}]",
            "",
            self.kind,
            self.spelling,
            self.line,
            self.col,
            indent = depth * 2
        )?;
        for child in &self.children {
            child.dump_at(out, depth + 1)?;
        }
        Ok(())
    }
}
