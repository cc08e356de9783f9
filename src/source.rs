//! Input discovery.
//!
//! Explicit file arguments are taken as-is; directory arguments are walked
//! recursively, keeping files whose extension matches the configured set.

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx", "hpp", "hh", "hxx", "h"];

fn extension_matcher(extensions: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for ext in extensions {
        let glob = Glob::new(&format!("*.{ext}"))
            .with_context(|| format!("invalid extension pattern: {ext}"))?;
        builder.add(glob);
    }
    builder.build().context("failed to build extension matcher")
}

/// Expand the configured inputs into a deterministic, deduplicated file list.
pub fn collect_inputs(inputs: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let matcher = extension_matcher(extensions)?;
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut discovered = walk_directory(input, &matcher)?;
            files.append(&mut discovered);
        } else {
            anyhow::ensure!(input.exists(), "input {:?} does not exist", input);
            // Explicit files bypass the extension filter, matching the
            // behavior of passing a file list on the command line.
            files.push(input.clone());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_directory(root: &Path, matcher: &GlobSet) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.with_context(|| format!("failed to walk directory {:?}", root))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name();
        if matcher.is_match(Path::new(name)) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
