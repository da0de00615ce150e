//! Integration tests for the generation config crate.

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;
use tfgen_config::{
    ConfigError, ConfigField, ConfigFormat, ConfigLoader, ConfigOverrides, ConfigValidator,
    GenerationConfig, Violation,
};

fn sample_config() -> GenerationConfig {
    GenerationConfig::new("t-123", "acme-prod", "Acme Corp", "/out/acme")
        .with_provider_version("0.25.3")
        .with_tenant_project("tenant")
        .with_aws_services_project("aws-svc")
        .with_app_project("app")
        .with_tf_state(true)
}

#[test]
fn test_sample_config_has_zero_violations() {
    let report = ConfigValidator::new().validate(&sample_config());

    assert!(report.is_valid());
    assert!(report.violations.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_empty_tenant_id_reports_exactly_one_violation() {
    let mut config = sample_config();
    config.tenant_id = String::new();

    let report = ConfigValidator::new().validate(&config);

    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0],
        Violation::MissingRequiredField {
            field: ConfigField::TenantId
        }
    );
}

#[test]
fn test_bad_provider_version_reports_exactly_one_violation() {
    let config = sample_config().with_provider_version("not-a-version");

    let report = ConfigValidator::new().validate(&config);

    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0],
        Violation::InvalidVersionString {
            value: "not-a-version".to_string()
        }
    );
}

#[test]
fn test_default_leaves_state_output_disabled() {
    assert!(!GenerationConfig::default().generate_tf_state);
}

#[test]
fn test_identical_configs_are_interchangeable() {
    assert_eq!(sample_config(), sample_config());
}

#[test]
fn test_save_load_round_trip_all_formats() {
    let dir = tempdir().unwrap();
    let config = sample_config();

    for name in ["tfgen.yaml", "tfgen.json", "tfgen.toml"] {
        let path = dir.path().join(name);
        ConfigLoader::save(&path, &config).unwrap();
        let loaded = ConfigLoader::load(&path).unwrap();
        assert_eq!(loaded, config, "round trip through {}", name);
    }
}

#[test]
fn test_load_partial_file_fills_baseline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.yaml");
    fs::write(&path, "tenant_id: t-9\ntarget_dir: /out\n").unwrap();

    let config = ConfigLoader::load(&path).unwrap();

    assert_eq!(config.tenant_id, "t-9");
    assert!(config.tenant_name.is_empty());
    assert!(!config.generate_tf_state);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = ConfigLoader::load(dir.path().join("absent.yaml")).unwrap_err();

    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_load_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(&path, "tenant_id = t-1\n").unwrap();

    let err = ConfigLoader::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn test_resolve_override_beats_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tfgen.yaml");
    ConfigLoader::save(&path, &sample_config()).unwrap();

    let overrides = ConfigOverrides {
        tenant_id: Some("t-456".to_string()),
        generate_tf_state: Some(false),
        ..Default::default()
    };

    let config = ConfigLoader::resolve(Some(&path), &overrides).unwrap();

    assert_eq!(config.tenant_id, "t-456");
    assert!(!config.generate_tf_state);
    // Untouched fields keep the file values.
    assert_eq!(config.tenant_name, "acme-prod");
    assert_eq!(config.duplo_provider_version, "0.25.3");
}

#[test]
fn test_resolve_without_file_starts_from_baseline() {
    let overrides = ConfigOverrides {
        tenant_id: Some("t-7".to_string()),
        ..Default::default()
    };

    let config = ConfigLoader::resolve(None, &overrides).unwrap();

    assert_eq!(config.tenant_id, "t-7");
    assert!(config.customer_name.is_empty());
}

#[test]
fn test_preflight_creates_target_dir() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("out").join("acme");

    let mut config = sample_config();
    config.target_dir = target.clone();

    let report = ConfigValidator::new().preflight(&config);

    assert!(report.is_valid());
    assert!(target.is_dir());
    assert!(!target.join(".tfgen-preflight").exists());
}

#[test]
fn test_preflight_unwritable_target_dir() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let mut config = sample_config();
    config.target_dir = blocker.join("out");

    let report = ConfigValidator::new().preflight(&config);

    assert_eq!(report.violations.len(), 1);
    assert!(matches!(
        report.violations[0],
        Violation::UnwritableTargetDir { .. }
    ));
    assert_eq!(report.violations[0].field(), ConfigField::TargetDir);
}

#[test]
fn test_preflight_skips_probe_for_empty_target_dir() {
    let mut config = sample_config();
    config.target_dir = PathBuf::new();

    let report = ConfigValidator::new().preflight(&config);

    // Only the missing-field violation, no probe result on top.
    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0],
        Violation::MissingRequiredField {
            field: ConfigField::TargetDir
        }
    );
}

#[test]
fn test_serialized_output_uses_config_keys() {
    let content = ConfigLoader::serialize(&sample_config(), ConfigFormat::Yaml).unwrap();

    for field in ConfigField::all() {
        assert!(
            content.contains(field.as_str()),
            "yaml output missing key {}",
            field
        );
    }
}
