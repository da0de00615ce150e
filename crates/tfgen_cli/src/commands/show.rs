//! Show command - Print the effective configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use tfgen_config::{ConfigFormat, ConfigLoader};

use super::OverrideArgs;

#[derive(Args)]
pub struct ShowArgs {
    /// Config file to start from
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "yaml")]
    format: String,

    #[command(flatten)]
    overrides: OverrideArgs,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let format = ConfigFormat::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("Unsupported config format: {}", args.format))?;

    let overrides = args.overrides.to_overrides();
    if !overrides.is_empty() {
        info!("Applying overrides from flags/environment");
    }

    let config = ConfigLoader::resolve(args.file.as_deref(), &overrides)?;
    let content =
        ConfigLoader::serialize(&config, format).context("Failed to serialize config")?;

    println!("{}", content);
    Ok(())
}
