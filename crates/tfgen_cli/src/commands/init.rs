//! Init command - Write a starter configuration file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use tfgen_config::{ConfigFormat, ConfigLoader, GenerationConfig};

#[derive(Args)]
pub struct InitArgs {
    /// Where to write the starter file (defaults to ./tfgen.<format>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File format for the starter config
    #[arg(short, long, default_value = "yaml")]
    format: String,

    /// Overwrite the file if it already exists
    #[arg(long)]
    force: bool,
}

pub fn execute(args: InitArgs) -> Result<()> {
    let format = ConfigFormat::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("Unsupported config format: {}", args.format))?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("tfgen.{}", format.as_str())));

    info!("Writing starter config to {:?}", path);

    if path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists: {:?}. Use --force to overwrite.",
            path
        );
    }

    let config = starter_config();
    ConfigLoader::save(&path, &config).context("Failed to write starter config")?;

    println!("✅ Starter configuration written to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Fill in the tenant, customer and target directory values");
    println!("  2. tfgen validate --file {}", path.display());

    Ok(())
}

fn starter_config() -> GenerationConfig {
    GenerationConfig::new("my-tenant-id", "my-tenant", "My Customer", "./terraform")
        .with_provider_version("0.25.3")
        .with_tenant_project("tenant")
        .with_aws_services_project("aws-services")
        .with_app_project("app")
}
