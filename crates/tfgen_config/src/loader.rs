//! Configuration file loading and override layering.
//!
//! The merge direction is fixed: baseline defaults first, then the config
//! file if one is given, then [`ConfigOverrides`] collected from flags or
//! the environment. Set override fields always win.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::models::GenerationConfig;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    /// Determine the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_str)
    }

    pub fn all() -> Vec<Self> {
        vec![ConfigFormat::Yaml, ConfigFormat::Json, ConfigFormat::Toml]
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reader and writer for generation config files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration from a file, dispatching on its extension.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<GenerationConfig> {
        let path = path.as_ref();
        debug!("Loading generation config from {:?}", path);

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let content = fs::read_to_string(path)?;

        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };
        Ok(config)
    }

    /// Write a configuration to a file in the format its extension names.
    pub fn save(path: impl AsRef<Path>, config: &GenerationConfig) -> ConfigResult<()> {
        let path = path.as_ref();
        debug!("Writing generation config to {:?}", path);

        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let content = Self::serialize(config, format)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Serialize a configuration in the given format.
    pub fn serialize(config: &GenerationConfig, format: ConfigFormat) -> ConfigResult<String> {
        let content = match format {
            ConfigFormat::Yaml => serde_yaml::to_string(config)?,
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
            ConfigFormat::Toml => toml::to_string_pretty(config)?,
        };
        Ok(content)
    }

    /// Resolve the effective configuration from an optional file plus
    /// overrides.
    pub fn resolve(
        file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> ConfigResult<GenerationConfig> {
        let mut config = match file {
            Some(path) => Self::load(path)?,
            None => GenerationConfig::default(),
        };
        overrides.apply_to(&mut config);
        Ok(config)
    }
}

/// Partial configuration collected from flags or the environment.
///
/// Only the fields that are set override the base configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub tenant_name: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub target_dir: Option<PathBuf>,
    #[serde(default)]
    pub duplo_provider_version: Option<String>,
    #[serde(default)]
    pub tenant_project: Option<String>,
    #[serde(default)]
    pub aws_services_project: Option<String>,
    #[serde(default)]
    pub app_project: Option<String>,
    #[serde(default)]
    pub generate_tf_state: Option<bool>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.tenant_id.is_none()
            && self.tenant_name.is_none()
            && self.customer_name.is_none()
            && self.target_dir.is_none()
            && self.duplo_provider_version.is_none()
            && self.tenant_project.is_none()
            && self.aws_services_project.is_none()
            && self.app_project.is_none()
            && self.generate_tf_state.is_none()
    }

    /// Copy every set field onto the base configuration.
    pub fn apply_to(&self, config: &mut GenerationConfig) {
        if let Some(v) = &self.tenant_id {
            config.tenant_id = v.clone();
        }
        if let Some(v) = &self.tenant_name {
            config.tenant_name = v.clone();
        }
        if let Some(v) = &self.customer_name {
            config.customer_name = v.clone();
        }
        if let Some(v) = &self.target_dir {
            config.target_dir = v.clone();
        }
        if let Some(v) = &self.duplo_provider_version {
            config.duplo_provider_version = v.clone();
        }
        if let Some(v) = &self.tenant_project {
            config.tenant_project = v.clone();
        }
        if let Some(v) = &self.aws_services_project {
            config.aws_services_project = v.clone();
        }
        if let Some(v) = &self.app_project {
            config.app_project = v.clone();
        }
        if let Some(v) = self.generate_tf_state {
            config.generate_tf_state = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("tfgen.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("tfgen.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("dir/tfgen.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("tfgen.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("tfgen.ini")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("tfgen")), None);
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = GenerationConfig::new("t-1", "old-name", "customer", "/out");
        let overrides = ConfigOverrides {
            tenant_name: Some("new-name".to_string()),
            generate_tf_state: Some(true),
            ..Default::default()
        };

        overrides.apply_to(&mut config);

        assert_eq!(config.tenant_id, "t-1");
        assert_eq!(config.tenant_name, "new-name");
        assert!(config.generate_tf_state);
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let original = GenerationConfig::new("t-1", "name", "customer", "/out");
        let mut config = original.clone();
        let overrides = ConfigOverrides::default();

        assert!(overrides.is_empty());
        overrides.apply_to(&mut config);
        assert_eq!(config, original);
    }

    #[test]
    fn test_serialize_formats() {
        let config = GenerationConfig::new("t-1", "name", "customer", "/out");

        for format in ConfigFormat::all() {
            let content = ConfigLoader::serialize(&config, format).unwrap();
            assert!(content.contains("t-1"), "{} output missing field", format);
        }
    }
}
