//! Render sinks for the collected index.
//!
//! Three sinks, each optional except the console listing:
//!
//! - **cxx**: a generated C++ source file holding name/id lookup tables;
//! - **json**: the constant records as a pretty-printed array;
//! - **console**: one `value, name, file` line per constant.

pub mod cxx;

use crate::model::EnumIndex;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub use cxx::{render_cxx, write_cxx};

/// Write the index as a pretty-printed JSON array of
/// `{name, value, file, line}` objects.
pub fn write_json(index: &EnumIndex, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create JSON output {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, index)
        .with_context(|| format!("failed to write JSON output {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// One line per constant in discovery order: `value, name, file`.
pub fn render_console<W: Write>(index: &EnumIndex, out: &mut W) -> io::Result<()> {
    for constant in index.constants() {
        writeln!(out, "{}, {}, {}", constant.value, constant.name, constant.file)?;
    }
    Ok(())
}
