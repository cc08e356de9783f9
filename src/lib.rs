pub mod ast;
pub mod codegen;
pub mod config;
pub mod error;
pub mod index;
pub mod lexer;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;

pub use ast::{Cursor, CursorKind};
pub use config::{CliArgs, IndexerConfig};
pub use error::{IndexError, Location};
pub use index::EnumIndexer;
pub use logging::{LoggingConfig, init_logging};
pub use model::{EnumConstant, EnumIndex};

use anyhow::{Context, Result};
use std::io::Write;

/// Index every configured input and render the configured sinks.
pub fn run(config: &IndexerConfig) -> Result<()> {
    let files = source::collect_inputs(&config.inputs, &config.extensions)?;
    anyhow::ensure!(!files.is_empty(), "no source files matched the inputs");

    tracing::info!(
        files = files.len(),
        target_enum = %config.target_enum,
        target_namespace = %config.target_namespace,
        "indexing sources"
    );

    let mut indexer = EnumIndexer::new(&config.target_enum, &config.target_namespace);
    for file in &files {
        indexer.index_file(file).map_err(|error| {
            tracing::error!(category = error.category(), "indexing failed");
            anyhow::Error::from(error)
        })?;
    }
    let index = indexer.into_index();

    if index.is_empty() {
        tracing::warn!(
            target_enum = %config.target_enum,
            target_namespace = %config.target_namespace,
            "no matching enum declarations found"
        );
    }

    if let Some(path) = config.cxx_out.as_deref() {
        codegen::write_cxx(&index, path)?;
        tracing::info!(path = %path.display(), "wrote generated C++");
    }
    if let Some(path) = config.json_out.as_deref() {
        codegen::write_json(&index, path)?;
        tracing::info!(path = %path.display(), "wrote JSON");
    }

    if !config.quiet {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        codegen::render_console(&index, &mut handle).context("failed to write console listing")?;
        handle.flush().ok();
    }

    Ok(())
}
