//! Data model for generation configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The recognized configuration options, named by their config-file keys.
///
/// Used by the validator to report which field a violation points at, so
/// callers never have to parse messages to find the offending option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    TenantId,
    TenantName,
    CustomerName,
    TargetDir,
    DuploProviderVersion,
    TenantProject,
    AwsServicesProject,
    AppProject,
    GenerateTfState,
}

impl ConfigField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::TenantId => "tenant_id",
            ConfigField::TenantName => "tenant_name",
            ConfigField::CustomerName => "customer_name",
            ConfigField::TargetDir => "target_dir",
            ConfigField::DuploProviderVersion => "duplo_provider_version",
            ConfigField::TenantProject => "tenant_project",
            ConfigField::AwsServicesProject => "aws_services_project",
            ConfigField::AppProject => "app_project",
            ConfigField::GenerateTfState => "generate_tf_state",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            ConfigField::TenantId,
            ConfigField::TenantName,
            ConfigField::CustomerName,
            ConfigField::TargetDir,
            ConfigField::DuploProviderVersion,
            ConfigField::TenantProject,
            ConfigField::AwsServicesProject,
            ConfigField::AppProject,
            ConfigField::GenerateTfState,
        ]
    }
}

impl std::fmt::Display for ConfigField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three generation groupings a tenant deployment is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    Tenant,
    AwsServices,
    App,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Tenant => "tenant",
            ProjectKind::AwsServices => "aws-services",
            ProjectKind::App => "app",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![ProjectKind::Tenant, ProjectKind::AwsServices, ProjectKind::App]
    }

    /// The configuration field carrying this grouping's name.
    pub fn config_field(&self) -> ConfigField {
        match self {
            ProjectKind::Tenant => ConfigField::TenantProject,
            ProjectKind::AwsServices => ConfigField::AwsServicesProject,
            ProjectKind::App => ConfigField::AppProject,
        }
    }
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete parameter set for one Terraform generation run.
///
/// A plain value object: it is constructed once per run, read by the
/// generator, and never mutated afterwards. Validation lives in
/// [`crate::validator`], loading in [`crate::loader`]; the type itself does
/// no I/O and enforces nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Unique key for the tenant being provisioned
    #[serde(default)]
    pub tenant_id: String,
    /// Display/lookup name for the tenant
    #[serde(default)]
    pub tenant_name: String,
    /// Name of the customer owning the tenant
    #[serde(default)]
    pub customer_name: String,
    /// Directory into which generated artifacts are written
    #[serde(default)]
    pub target_dir: PathBuf,
    /// Terraform provider version pinned in generated code
    #[serde(default)]
    pub duplo_provider_version: String,
    /// Grouping name for tenant-level generated resources
    #[serde(default)]
    pub tenant_project: String,
    /// Grouping name for cloud-services generated resources
    #[serde(default)]
    pub aws_services_project: String,
    /// Grouping name for application-level generated resources
    #[serde(default)]
    pub app_project: String,
    /// Whether Terraform state-related output is also emitted
    #[serde(default)]
    pub generate_tf_state: bool,
}

impl Default for GenerationConfig {
    /// The documented baseline: every string and path empty, state output
    /// disabled. Partial config files deserialize onto this baseline.
    fn default() -> Self {
        Self {
            tenant_id: String::new(),
            tenant_name: String::new(),
            customer_name: String::new(),
            target_dir: PathBuf::new(),
            duplo_provider_version: String::new(),
            tenant_project: String::new(),
            aws_services_project: String::new(),
            app_project: String::new(),
            generate_tf_state: false,
        }
    }
}

impl GenerationConfig {
    /// Create a configuration with the four required fields set.
    pub fn new(
        tenant_id: impl Into<String>,
        tenant_name: impl Into<String>,
        customer_name: impl Into<String>,
        target_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            tenant_name: tenant_name.into(),
            customer_name: customer_name.into(),
            target_dir: target_dir.into(),
            ..Default::default()
        }
    }

    /// Pin the Terraform provider version emitted into generated code.
    pub fn with_provider_version(mut self, version: impl Into<String>) -> Self {
        self.duplo_provider_version = version.into();
        self
    }

    /// Name the tenant-level generation grouping.
    pub fn with_tenant_project(mut self, name: impl Into<String>) -> Self {
        self.tenant_project = name.into();
        self
    }

    /// Name the cloud-services generation grouping.
    pub fn with_aws_services_project(mut self, name: impl Into<String>) -> Self {
        self.aws_services_project = name.into();
        self
    }

    /// Name the application-level generation grouping.
    pub fn with_app_project(mut self, name: impl Into<String>) -> Self {
        self.app_project = name.into();
        self
    }

    /// Set whether Terraform state-related output is also emitted.
    pub fn with_tf_state(mut self, enabled: bool) -> Self {
        self.generate_tf_state = enabled;
        self
    }

    /// Get the grouping label for one project kind.
    pub fn project_name(&self, kind: ProjectKind) -> &str {
        match kind {
            ProjectKind::Tenant => &self.tenant_project,
            ProjectKind::AwsServices => &self.aws_services_project,
            ProjectKind::App => &self.app_project,
        }
    }

    /// All three grouping labels, in declaration order.
    pub fn project_names(&self) -> [(ProjectKind, &str); 3] {
        [
            (ProjectKind::Tenant, self.tenant_project.as_str()),
            (ProjectKind::AwsServices, self.aws_services_project.as_str()),
            (ProjectKind::App, self.app_project.as_str()),
        ]
    }
}
