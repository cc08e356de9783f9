//! Dump the parsed declaration tree of C++ source files.
//!
//! Debugging companion to `index-enums`: prints each cursor as
//! `kind: spelling: [line=.., col=..]`, indented by depth.

use anyhow::{Context, Result};
use clap::Parser;
use enum_indexer::lexer::tokenize;
use enum_indexer::parser::parse_translation_unit;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dump-ast", about = "Dump a C++ file's declaration tree", version)]
struct Args {
    #[arg(value_name = "FILE", required = true, help = "File(s) to dump")]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for file in &args.files {
        let source = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let tokens = tokenize(&source, file)?;
        let root = parse_translation_unit(tokens, file)?;
        root.dump(&mut out)?;
        out.flush()?;
    }
    Ok(())
}
