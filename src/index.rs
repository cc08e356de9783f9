//! The enum matcher.
//!
//! Walks the cursor tree building a fully-qualified namespace string and
//! records the constants of every enum that satisfies all three rules:
//!
//! 1. the enum's spelling equals the target enum name;
//! 2. its semantic parent is a namespace (never a class, struct, or
//!    template);
//! 3. the target namespace appears somewhere in its namespace ancestry.

use crate::ast::{Cursor, CursorKind};
use crate::error::IndexError;
use crate::lexer::tokenize;
use crate::model::{EnumConstant, EnumIndex};
use crate::parser::parse_translation_unit;
use std::fs;
use std::path::Path;

pub struct EnumIndexer {
    target_enum: String,
    target_namespace: String,
    index: EnumIndex,
}

impl EnumIndexer {
    pub fn new(target_enum: impl Into<String>, target_namespace: impl Into<String>) -> Self {
        Self {
            target_enum: target_enum.into(),
            target_namespace: target_namespace.into(),
            index: EnumIndex::new(),
        }
    }

    pub fn index_file(&mut self, path: &Path) -> Result<(), IndexError> {
        let source = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.index_source(&source, path)
    }

    pub fn index_source(&mut self, source: &str, file: &Path) -> Result<(), IndexError> {
        let tokens = tokenize(source, file)?;
        let root = parse_translation_unit(tokens, file)?;
        let before = self.index.len();
        self.search(&root, "::", file);
        tracing::debug!(
            file = %file.display(),
            constants = self.index.len() - before,
            "indexed source file"
        );
        Ok(())
    }

    /// Depth-first walk; only namespace cursors extend the fully-qualified
    /// prefix, so class-scoped enums never see a namespace parent here.
    fn search(&mut self, node: &Cursor, fq_namespace: &str, file: &Path) {
        for child in &node.children {
            match child.kind {
                CursorKind::Namespace => {
                    let nested = format!("{}{}::", fq_namespace, child.spelling);
                    self.search(child, &nested, file);
                }
                CursorKind::EnumDecl => {
                    self.handle_enum_decl(child, node.kind, fq_namespace, file);
                }
                _ => {
                    self.search(child, fq_namespace, file);
                }
            }
        }
    }

    fn handle_enum_decl(
        &mut self,
        node: &Cursor,
        parent_kind: CursorKind,
        fq_namespace: &str,
        file: &Path,
    ) {
        if parent_kind != CursorKind::Namespace {
            return;
        }
        if node.spelling != self.target_enum {
            return;
        }
        let required = format!("::{}::", self.target_namespace);
        if !fq_namespace.contains(&required) {
            return;
        }
        let prefix = format!("{}{}::", fq_namespace, node.spelling);
        self.record_constants(node, &prefix, file);
    }

    fn record_constants(&mut self, node: &Cursor, prefix: &str, file: &Path) {
        for constant in &node.children {
            if constant.kind != CursorKind::EnumConstantDecl {
                continue;
            }
            self.index.push(EnumConstant {
                name: format!("{}{}", prefix, constant.spelling),
                value: constant.value.unwrap_or_default(),
                file: file.display().to_string(),
                line: constant.line,
            });
        }
    }

    pub fn index(&self) -> &EnumIndex {
        &self.index
    }

    pub fn into_index(self) -> EnumIndex {
        self.index
    }
}
