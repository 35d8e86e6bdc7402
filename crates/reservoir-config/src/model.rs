// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so misspelled keys are
//! reported at startup instead of silently ignored.

use std::path::PathBuf;

use reservoir_core::{MODELS_GROUP, PARAMETER_SETS_GROUP};
use serde::{Deserialize, Serialize};

/// Top-level Reservoir configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReservoirConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Entry-point discovery settings.
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Where the registries find their entry points.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Group identifier of the models registry.
    #[serde(default = "default_models_group")]
    pub models_group: String,

    /// Group identifier of the parameter-sets registry.
    #[serde(default = "default_parameter_sets_group")]
    pub parameter_sets_group: String,

    /// Include entry points registered at link time.
    #[serde(default = "default_true")]
    pub inventory: bool,

    /// Entry-point manifests to read, in order. Later manifests override
    /// earlier ones and the link-time table on duplicate names.
    #[serde(default)]
    pub manifests: Vec<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            models_group: default_models_group(),
            parameter_sets_group: default_parameter_sets_group(),
            inventory: true,
            manifests: Vec::new(),
        }
    }
}

fn default_models_group() -> String {
    MODELS_GROUP.to_string()
}

fn default_parameter_sets_group() -> String {
    PARAMETER_SETS_GROUP.to_string()
}

fn default_true() -> bool {
    true
}
