use aleo_connector::{logger, ChainsFile, ConnectorApp, PathSettings};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[clap(name = "aleo-connector", about = "Validate Aleo custodian connector configuration")]
pub struct Args {
    /// JSON file listing the chains to configure
    #[clap(long, env = "ALEO_CONNECTOR_CONFIG")]
    config: PathBuf,

    #[clap(long, default_value("./keys"))]
    keystore: String,

    #[clap(long, default_value("./blockstore"))]
    blockstore: String,

    /// Ignore the blockstore and resync from the custodian
    #[clap(long)]
    fresh: bool,

    #[clap(long, value_enum, default_value_t = logger::LogFormat::Pretty)]
    log_format: logger::LogFormat,

    #[clap(long, default_value("info"))]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::initialize(&args.log_level, args.log_format);

    let chains_file = ChainsFile::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    info!(path = %args.config.display(), chains = chains_file.chains.len(), "Loaded chain file");

    let paths = PathSettings {
        keystore_path: args.keystore,
        blockstore_path: args.blockstore,
        fresh_start: args.fresh,
    };

    let app = ConnectorApp::new(chains_file, paths);
    let configs = app.build_all().context("Failed to build connector configuration")?;

    for config in &configs {
        println!(
            "{} (id {}): endpoint={} http={} start_block={} relayer_id={}",
            config.name,
            config.id,
            config.endpoint,
            config.http,
            config.start_block,
            config.relayer_id
        );
    }

    Ok(())
}
