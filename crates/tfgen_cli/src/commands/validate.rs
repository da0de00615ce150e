//! Validate command - Check a configuration before generation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use tfgen_config::{ConfigLoader, ConfigValidator};

use super::OverrideArgs;

#[derive(Args)]
pub struct ValidateArgs {
    /// Config file to validate
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Skip the target directory write probe
    #[arg(long)]
    skip_preflight: bool,

    #[command(flatten)]
    overrides: OverrideArgs,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating generation config");

    let overrides = args.overrides.to_overrides();
    let config = ConfigLoader::resolve(args.file.as_deref(), &overrides)?;

    let validator = ConfigValidator::new();
    let report = if args.skip_preflight {
        validator.validate(&config)
    } else {
        validator.preflight(&config)
    };

    println!("📋 Checking configuration for tenant '{}'...", config.tenant_id);

    for violation in &report.violations {
        println!("   ❌ {}: {}", violation.field(), violation);
    }
    for warning in &report.warnings {
        println!("   ⚠️  {}", warning);
    }

    println!();
    if report.is_valid() {
        println!("✅ Configuration is ready for generation");
        Ok(())
    } else {
        anyhow::bail!(
            "Config validation failed: {} violation(s) found",
            report.violations.len()
        );
    }
}
