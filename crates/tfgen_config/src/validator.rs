//! Configuration validation.
//!
//! Validation is deliberately kept outside [`GenerationConfig`] so the
//! parameter object stays free of behavior. A consuming generator runs
//! [`ConfigValidator::preflight`] (or [`ConfigValidator::ensure_valid`])
//! before any generation work begins and reports the violated fields.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::models::{ConfigField, GenerationConfig};

/// A violated configuration invariant, pointing at the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("missing required field: {field}")]
    MissingRequiredField { field: ConfigField },

    #[error("invalid version string for duplo_provider_version: {value:?}")]
    InvalidVersionString { value: String },

    #[error("target directory {path:?} is not writable: {reason}")]
    UnwritableTargetDir { path: PathBuf, reason: String },
}

impl Violation {
    /// The configuration field this violation points at.
    pub fn field(&self) -> ConfigField {
        match self {
            Violation::MissingRequiredField { field } => *field,
            Violation::InvalidVersionString { .. } => ConfigField::DuploProviderVersion,
            Violation::UnwritableTargetDir { .. } => ConfigField::TargetDir,
        }
    }
}

/// Validation outcome: hard violations plus non-fatal warnings.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for generation configurations.
pub struct ConfigValidator {
    version_pattern: Regex,
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self {
            // Optional Terraform constraint operator, then a semver-like
            // core: optional leading v, up to three numeric components,
            // optional pre-release and build suffixes.
            version_pattern: Regex::new(
                r"^(?:(?:=|!=|>=|<=|>|<|~>)\s*)?v?\d+(?:\.\d+){0,2}(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?$",
            )
            .unwrap(),
        }
    }

    /// Check the structural invariants of a configuration. Pure, no I/O.
    ///
    /// Missing required fields and an unparsable provider version are
    /// violations. Unpinned versions, empty grouping labels and duplicated
    /// grouping labels are warnings.
    pub fn validate(&self, config: &GenerationConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        if config.tenant_id.is_empty() {
            report.add_violation(Violation::MissingRequiredField {
                field: ConfigField::TenantId,
            });
        }

        if config.tenant_name.is_empty() {
            report.add_violation(Violation::MissingRequiredField {
                field: ConfigField::TenantName,
            });
        }

        if config.customer_name.is_empty() {
            report.add_violation(Violation::MissingRequiredField {
                field: ConfigField::CustomerName,
            });
        }

        if config.target_dir.as_os_str().is_empty() {
            report.add_violation(Violation::MissingRequiredField {
                field: ConfigField::TargetDir,
            });
        }

        if config.duplo_provider_version.is_empty() {
            report.add_warning(
                "duplo_provider_version is empty; generated code will not pin the provider",
            );
        } else if !self.version_pattern.is_match(&config.duplo_provider_version) {
            report.add_violation(Violation::InvalidVersionString {
                value: config.duplo_provider_version.clone(),
            });
        }

        let names = config.project_names();

        for (kind, name) in names {
            if name.is_empty() {
                report.add_warning(format!("{} is empty", kind.config_field()));
            }
        }

        // Consumers use the three groupings as separate namespaces, so a
        // shared label is a hazard worth surfacing.
        for i in 0..names.len() {
            for (b_kind, b_name) in names.iter().skip(i + 1) {
                let (a_kind, a_name) = names[i];
                if !a_name.is_empty() && a_name == *b_name {
                    report.add_warning(format!(
                        "{} and {} share the name '{}'",
                        a_kind.config_field(),
                        b_kind.config_field(),
                        a_name
                    ));
                }
            }
        }

        report
    }

    /// Structural validation plus the target directory write probe.
    ///
    /// Creates `target_dir` when it does not exist yet; probing writability
    /// is part of the fail-fast contract, and the generator would create
    /// the directory anyway. The probe file is removed afterwards. Skipped
    /// when `target_dir` is empty, which is already a missing-field
    /// violation.
    pub fn preflight(&self, config: &GenerationConfig) -> ValidationReport {
        let mut report = self.validate(config);

        if !config.target_dir.as_os_str().is_empty() {
            if let Err(e) = probe_target_dir(&config.target_dir) {
                report.add_violation(Violation::UnwritableTargetDir {
                    path: config.target_dir.clone(),
                    reason: e.to_string(),
                });
            }
        }

        report
    }

    /// Fail-fast check for consuming generators: error out before any
    /// generation work begins, naming every violated field.
    pub fn ensure_valid(&self, config: &GenerationConfig) -> ConfigResult<()> {
        let report = self.validate(config);
        if report.is_valid() {
            return Ok(());
        }

        let details = report
            .violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::ValidationFailed(details))
    }
}

fn probe_target_dir(dir: &Path) -> std::io::Result<()> {
    debug!("Probing target directory {:?}", dir);

    fs::create_dir_all(dir)?;
    let probe = dir.join(".tfgen-preflight");
    fs::write(&probe, b"")?;
    fs::remove_file(&probe)?;
    Ok(())
}
