// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Integration tests for the configuration system.

use figment::Jail;
use reservoir_config::diagnostic::ConfigError;
use reservoir_config::{
    load_and_validate_path, load_and_validate_str, load_config, load_config_from_str,
};

#[test]
fn empty_config_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    assert_eq!(config.log.level, "warn");
    assert_eq!(config.registry.models_group, "pybamm_models");
    assert_eq!(config.registry.parameter_sets_group, "pybamm_parameter_sets");
    assert!(config.registry.inventory);
    assert!(config.registry.manifests.is_empty());
}

#[test]
fn full_config_deserializes() {
    let toml = r#"
[log]
level = "debug"

[registry]
models_group = "custom_models"
parameter_sets_group = "custom_parameter_sets"
inventory = false
manifests = ["a.toml", "b.toml"]
"#;
    let config = load_config_from_str(toml).unwrap();
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.registry.models_group, "custom_models");
    assert!(!config.registry.inventory);
    assert_eq!(config.registry.manifests.len(), 2);
}

#[test]
fn unknown_key_gets_a_suggestion() {
    let toml = "[registry]\nmodel_group = \"x\"\n";
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "model_group");
            assert_eq!(suggestion.as_deref(), Some("models_group"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[registry]\ninventory = \"yes\"\n").unwrap_err();
    assert!(
        matches!(&errors[0], ConfigError::InvalidType { key, .. } if key.contains("inventory")),
        "got {:?}",
        errors
    );
}

#[test]
fn validation_runs_after_deserialization() {
    let errors = load_and_validate_str("[log]\nlevel = \"loud\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::Validation { .. }));
}

#[test]
fn manifests_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("entry-points.toml");
    std::fs::write(&manifest, "[entry-points.pybamm_models]\n").unwrap();

    let config_path = dir.path().join("reservoir.toml");
    std::fs::write(
        &config_path,
        format!("[registry]\nmanifests = [{:?}]\n", manifest.display().to_string()),
    )
    .unwrap();
    let config = load_and_validate_path(&config_path).unwrap();
    assert_eq!(config.registry.manifests, vec![manifest]);

    std::fs::write(&config_path, "[registry]\nmanifests = [\"missing.toml\"]\n").unwrap();
    let errors = load_and_validate_path(&config_path).unwrap_err();
    assert!(errors[0].to_string().contains("missing.toml"));
}

#[test]
fn local_file_and_env_are_layered() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "reservoir.toml",
            "[registry]\nmodels_group = \"local_models\"\n",
        )?;
        jail.set_env("RESERVOIR_LOG_LEVEL", "warn");
        jail.set_env("RESERVOIR_REGISTRY_PARAMETER_SETS_GROUP", "env_sets");
        jail.set_env("RESERVOIR_REGISTRY_INVENTORY", "false");

        let config = load_config()?;
        assert_eq!(config.registry.models_group, "local_models");
        assert_eq!(config.registry.parameter_sets_group, "env_sets");
        assert!(!config.registry.inventory);
        assert_eq!(config.log.level, "warn");
        Ok(())
    });
}

#[test]
fn env_overrides_apply_to_a_single_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[log]\nlevel = \"error\"\n")?;
        jail.set_env("RESERVOIR_LOG_LEVEL", "debug");
        jail.set_env("RESERVOIR_REGISTRY_MODELS_GROUP", "env_models");

        let config = load_and_validate_path(&jail.directory().join("custom.toml"))
            .map_err(|errors| format!("{errors:?}"))?;
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.registry.models_group, "env_models");
        Ok(())
    });
}
