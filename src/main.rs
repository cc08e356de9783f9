use clap::Parser;
use enum_indexer::{CliArgs, IndexerConfig, LoggingConfig, init_logging, run};

fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = IndexerConfig::from_args(cli)?;

    // Validate configuration before any parsing starts (fail-fast)
    config.validate()?;

    run(&config)
}
