// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::ReservoirConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure rather than stopping at the first one.
pub fn validate_config(config: &ReservoirConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let registry = &config.registry;

    if !LOG_LEVELS.contains(&config.log.level.to_ascii_lowercase().as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    for (key, group) in [
        ("registry.models_group", &registry.models_group),
        ("registry.parameter_sets_group", &registry.parameter_sets_group),
    ] {
        if group.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    if !registry.models_group.trim().is_empty()
        && registry.models_group == registry.parameter_sets_group
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "registry.models_group and registry.parameter_sets_group must differ, both are `{}`",
                registry.models_group
            ),
        });
    }

    if !registry.inventory && registry.manifests.is_empty() {
        errors.push(ConfigError::Validation {
            message: "registry.inventory is disabled and no registry.manifests are listed; \
                      no entry points could be discovered"
                .to_string(),
        });
    }

    for (i, path) in registry.manifests.iter().enumerate() {
        if !path.is_file() {
            errors.push(ConfigError::Validation {
                message: format!(
                    "registry.manifests[{i}] `{}` does not exist or is not a file",
                    path.display()
                ),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
