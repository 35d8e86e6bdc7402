// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration for the Reservoir registries and CLI.
//!
//! TOML files are layered with Figment (`deny_unknown_fields` throughout),
//! overridden by `RESERVOIR_*` environment variables, validated after
//! deserialization, and reported as miette diagnostics with key suggestions.
//!
//! ```no_run
//! use reservoir_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("models group: {}", config.registry.models_group);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

use tracing::debug;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{LogConfig, RegistryConfig, ReservoirConfig};

/// Load the layered configuration and validate it.
pub fn load_and_validate() -> Result<ReservoirConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load one config file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<ReservoirConfig, Vec<ConfigError>> {
    debug!(path = %path.display(), "loading configuration file");
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = std::fs::read_to_string(path)
                .map(|content| vec![(path.display().to_string(), content)])
                .unwrap_or_default();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<ReservoirConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Contents of every config file in the lookup hierarchy that exists.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::LOCAL_CONFIG_PATH))
        .unwrap_or_else(|_| loader::LOCAL_CONFIG_PATH.into());

    [
        Some(local),
        loader::user_config_path(),
        Some(loader::SYSTEM_CONFIG_PATH.into()),
    ]
    .into_iter()
    .flatten()
    .filter_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        Some((path.display().to_string(), content))
    })
    .collect()
}
