//! Error types for the enum indexer.
//!
//! Lex and parse failures carry the 1-based source location libclang-style
//! tooling reports, so diagnostics read as `file:line:col: message`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A 1-based line/column position within a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub col: u32,
}

impl Location {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("{}:{}: {}", .file.display(), .location, .message)]
    Lex {
        file: PathBuf,
        location: Location,
        message: String,
    },

    #[error("{}:{}: {}", .file.display(), .location, .message)]
    Parse {
        file: PathBuf,
        location: Location,
        message: String,
    },

    /// Enum constant initializers are limited to integer literals with an
    /// optional sign. Anything else would break implicit-value continuation
    /// for the constants that follow, so the whole file is rejected.
    #[error("{}:{}: unsupported initializer for enum constant `{}`", .file.display(), .location, .constant)]
    UnsupportedInitializer {
        file: PathBuf,
        location: Location,
        constant: String,
    },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    /// Error category used as a structured log field.
    pub fn category(&self) -> &'static str {
        match self {
            IndexError::Lex { .. } => "lex_error",
            IndexError::Parse { .. } | IndexError::UnsupportedInitializer { .. } => "parse_error",
            IndexError::Io { .. } => "io_error",
        }
    }
}
