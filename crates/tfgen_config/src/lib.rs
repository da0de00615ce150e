//! # tfgen_config
//!
//! Generation configuration for the tfgen Terraform generator.
//!
//! This crate owns the parameter set that drives one Terraform generation
//! run for a DuploCloud tenant. The generator consuming it lives elsewhere;
//! nothing in this crate renders Terraform.
//!
//! ## Features
//!
//! - The [`GenerationConfig`] value object with an explicit all-empty
//!   baseline and a builder for the optional fields
//! - A validation pass reporting per-field violations and warnings,
//!   separate from the data type
//! - Config file loading (YAML, JSON, TOML) with flag/environment override
//!   layering
//!
//! ## Example
//!
//! ```rust
//! use tfgen_config::{ConfigValidator, GenerationConfig};
//!
//! let config = GenerationConfig::new("t-123", "acme-prod", "Acme Corp", "/out/acme")
//!     .with_provider_version("0.25.3")
//!     .with_tenant_project("tenant")
//!     .with_aws_services_project("aws-svc")
//!     .with_app_project("app")
//!     .with_tf_state(true);
//!
//! let report = ConfigValidator::new().validate(&config);
//! assert!(report.is_valid());
//! ```

pub mod error;
pub mod loader;
pub mod models;
pub mod validator;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigFormat, ConfigLoader, ConfigOverrides};
pub use models::{ConfigField, GenerationConfig, ProjectKind};
pub use validator::{ConfigValidator, ValidationReport, Violation};
