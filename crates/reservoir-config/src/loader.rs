// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./reservoir.toml` > `~/.config/reservoir/reservoir.toml` >
//! `/etc/reservoir/reservoir.toml`, with `RESERVOIR_*` environment overrides.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ReservoirConfig;

/// Path of the per-user config file, if the platform has a config directory.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("reservoir/reservoir.toml"))
}

pub const SYSTEM_CONFIG_PATH: &str = "/etc/reservoir/reservoir.toml";
pub const LOCAL_CONFIG_PATH: &str = "reservoir.toml";

/// Build the layered Figment without extracting it.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/reservoir/reservoir.toml`
/// 3. `~/.config/reservoir/reservoir.toml`
/// 4. `./reservoir.toml`
/// 5. `RESERVOIR_*` environment variables
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ReservoirConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<ReservoirConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from TOML content only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<ReservoirConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReservoirConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ReservoirConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReservoirConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// `RESERVOIR_REGISTRY_MODELS_GROUP` maps to `registry.models_group`.
///
/// figment passes the key uppercase with the prefix stripped. Only the first
/// underscore after the section name splits, so keys that contain underscores
/// survive.
fn env_provider() -> Env {
    Env::prefixed("RESERVOIR_").map(|key| {
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = key_str
            .replacen("log_", "log.", 1)
            .replacen("registry_", "registry.", 1);
        mapped.into()
    })
}
