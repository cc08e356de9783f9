use crate::source::DEFAULT_EXTENSIONS;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub inputs: Vec<PathBuf>,
    pub target_enum: String,
    pub target_namespace: String,
    pub json_out: Option<PathBuf>,
    pub cxx_out: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub quiet: bool,
}

impl IndexerConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            inputs: cli_inputs,
            target_enum: cli_target_enum,
            target_namespace: cli_target_namespace,
            json_out: cli_json_out,
            cxx_out: cli_cxx_out,
            extensions: cli_extensions,
            quiet: cli_quiet,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            inputs: file_inputs,
            target_enum: file_target_enum,
            target_namespace: file_target_namespace,
            json_out: file_json_out,
            cxx_out: file_cxx_out,
            extensions: file_extensions,
            quiet: file_quiet,
        } = file_config;

        let inputs = if cli_inputs.is_empty() {
            file_inputs.unwrap_or_default()
        } else {
            cli_inputs
        };
        anyhow::ensure!(!inputs.is_empty(), "at least one input path is required");

        let target_enum = cli_target_enum
            .or(file_target_enum)
            .context("a target enum name is required (--enum)")?;
        let target_namespace = cli_target_namespace
            .or(file_target_namespace)
            .context("a target ancestor namespace is required (--namespace)")?;

        anyhow::ensure!(
            is_cpp_identifier(&target_enum),
            "target enum {:?} is not a valid C++ identifier",
            target_enum
        );
        anyhow::ensure!(
            is_cpp_identifier(&target_namespace),
            "target namespace {:?} is not a valid C++ identifier",
            target_namespace
        );

        let mut extensions = cli_extensions
            .or(file_extensions)
            .unwrap_or_else(|| {
                DEFAULT_EXTENSIONS
                    .iter()
                    .map(|ext| (*ext).to_string())
                    .collect()
            })
            .into_iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect::<Vec<_>>();

        extensions.sort();
        extensions.dedup();

        anyhow::ensure!(
            !extensions.is_empty(),
            "at least one file extension must be provided"
        );

        Ok(Self {
            inputs,
            target_enum,
            target_namespace,
            json_out: cli_json_out.or(file_json_out),
            cxx_out: cli_cxx_out.or(file_cxx_out),
            extensions,
            quiet: cli_quiet || file_quiet.unwrap_or(false),
        })
    }

    /// Fail-fast checks before any parsing starts.
    pub fn validate(&self) -> Result<()> {
        for input in &self.inputs {
            anyhow::ensure!(input.exists(), "input {:?} does not exist", input);
        }
        for output in [self.json_out.as_deref(), self.cxx_out.as_deref()]
            .into_iter()
            .flatten()
        {
            if let Some(parent) = output.parent()
                && !parent.as_os_str().is_empty()
            {
                anyhow::ensure!(
                    parent.exists(),
                    "output directory {:?} does not exist",
                    parent
                );
            }
        }
        Ok(())
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "index-enums",
    about = "Parses C++ sources to index key enum symbols",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(value_name = "PATH", help = "File(s) or directories to process")]
    pub inputs: Vec<PathBuf>,

    #[arg(
        short = 'e',
        long = "enum",
        env = "ENUM_INDEXER_ENUM",
        value_name = "NAME",
        help = "The enum{} name to match"
    )]
    pub target_enum: Option<String>,

    #[arg(
        short = 'n',
        long = "namespace",
        env = "ENUM_INDEXER_NAMESPACE",
        value_name = "NAME",
        help = "Required ancestor namespace"
    )]
    pub target_namespace: Option<String>,

    #[arg(
        short = 'j',
        long = "json",
        value_name = "FILE",
        help = "Generate JSON to filename"
    )]
    pub json_out: Option<PathBuf>,

    #[arg(
        short = 'c',
        long = "cpp",
        value_name = "FILE",
        help = "Generate C++ to filename"
    )]
    pub cxx_out: Option<PathBuf>,

    #[arg(
        long,
        env = "ENUM_INDEXER_EXTENSIONS",
        value_name = "EXT",
        value_delimiter = ',',
        help = "Comma-separated list of extensions kept when walking directories"
    )]
    pub extensions: Option<Vec<String>>,

    #[arg(long, help = "Suppress the console listing")]
    pub quiet: bool,
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    inputs: Option<Vec<PathBuf>>,
    #[serde(rename = "enum", alias = "target_enum")]
    target_enum: Option<String>,
    #[serde(rename = "namespace", alias = "target_namespace")]
    target_namespace: Option<String>,
    #[serde(rename = "json", alias = "json_out")]
    json_out: Option<PathBuf>,
    #[serde(rename = "cpp", alias = "cxx_out")]
    cxx_out: Option<PathBuf>,
    extensions: Option<Vec<String>>,
    quiet: Option<bool>,
}

fn is_cpp_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
