//! Generated C++ lookup tables.
//!
//! The output is a single source file declaring an `EnumIndex` class with two
//! const maps: name to id in discovery order, and id to name ascending by
//! value. Every entry carries a `// file:line` provenance comment so the
//! generated table can be traced back to the declaration it came from.

use crate::model::EnumIndex;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub fn render_cxx(index: &EnumIndex) -> String {
    let mut out = String::new();
    out.push_str("#include <map>\n");
    out.push_str("#include <string>\n\n");
    out.push_str("class EnumIndex {\n");

    out.push_str("    const std::map<std::string, uint32_t> mTlvIdByName = {\n");
    for constant in index.constants() {
        let _ = writeln!(
            out,
            "        {{\"{}\", {} }}, // {}:{}",
            constant.name, constant.value, constant.file, constant.line
        );
    }
    out.push_str("    };\n\n");

    out.push_str("    const std::map<uint32_t, std::string> mTlvNameById {\n");
    for constant in index.by_value() {
        let _ = writeln!(
            out,
            "        {{ {}, \"{}\"}}, // {}:{}",
            constant.value, constant.name, constant.file, constant.line
        );
    }
    out.push_str("    };\n\n");
    out.push_str("}; // class EnumIndex\n");
    out
}

pub fn write_cxx(index: &EnumIndex, path: &Path) -> Result<()> {
    fs::write(path, render_cxx(index))
        .with_context(|| format!("failed to write C++ output {}", path.display()))
}
