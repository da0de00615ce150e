//! CLI command definitions.
//!
//! This module defines the command structure for the tfgen CLI. Every
//! subcommand operates on generation configuration only; the Terraform
//! generator consuming that configuration runs elsewhere.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tfgen_config::ConfigOverrides;

pub mod init;
pub mod show;
pub mod validate;

/// tfgen - Terraform generation configuration for DuploCloud tenants
#[derive(Parser)]
#[command(name = "tfgen")]
#[command(version, about = "tfgen - Terraform generation configuration for DuploCloud tenants")]
#[command(long_about = r#"
tfgen manages the configuration that drives Terraform code generation for
DuploCloud tenant deployments: who the tenant is, where generated code goes,
which provider version is pinned, and how the output is grouped into
projects.

WORKFLOWS:
  init       → Write a starter configuration file
  validate   → Check a configuration before generation (fail fast)
  show       → Print the effective configuration after all overrides

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Config file error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter configuration file
    Init(init::InitArgs),

    /// Validate a configuration before handing it to the generator
    Validate(validate::ValidateArgs),

    /// Print the effective configuration after file, env and flag overrides
    Show(show::ShowArgs),
}

/// Override flags shared by commands that resolve a configuration.
///
/// Every flag falls back to a TFGEN_* environment variable, so precedence
/// is flag, then environment, then config file, then baseline default.
#[derive(Args)]
pub struct OverrideArgs {
    /// Unique key for the tenant being provisioned
    #[arg(long, env = "TFGEN_TENANT_ID")]
    pub tenant_id: Option<String>,

    /// Display name for the tenant
    #[arg(long, env = "TFGEN_TENANT_NAME")]
    pub tenant_name: Option<String>,

    /// Name of the customer owning the tenant
    #[arg(long, env = "TFGEN_CUSTOMER_NAME")]
    pub customer_name: Option<String>,

    /// Directory for generated artifacts
    #[arg(long, env = "TFGEN_TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Terraform provider version pinned in generated code
    #[arg(long, env = "TFGEN_PROVIDER_VERSION")]
    pub provider_version: Option<String>,

    /// Grouping name for tenant-level resources
    #[arg(long, env = "TFGEN_TENANT_PROJECT")]
    pub tenant_project: Option<String>,

    /// Grouping name for cloud-services resources
    #[arg(long, env = "TFGEN_AWS_SERVICES_PROJECT")]
    pub aws_services_project: Option<String>,

    /// Grouping name for application-level resources
    #[arg(long, env = "TFGEN_APP_PROJECT")]
    pub app_project: Option<String>,

    /// Also emit Terraform state-related output (true/false)
    #[arg(long, env = "TFGEN_GENERATE_TF_STATE")]
    pub generate_tf_state: Option<bool>,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tenant_id: self.tenant_id.clone(),
            tenant_name: self.tenant_name.clone(),
            customer_name: self.customer_name.clone(),
            target_dir: self.target_dir.clone(),
            duplo_provider_version: self.provider_version.clone(),
            tenant_project: self.tenant_project.clone(),
            aws_services_project: self.aws_services_project.clone(),
            app_project: self.app_project.clone(),
            generate_tf_state: self.generate_tf_state,
        }
    }
}
