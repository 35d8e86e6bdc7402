// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Group identifiers and component kinds shared across the workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Entry-point group under which the host framework looks up models.
pub const MODELS_GROUP: &str = "pybamm_models";

/// Entry-point group under which the host framework looks up parameter sets.
pub const PARAMETER_SETS_GROUP: &str = "pybamm_parameter_sets";

/// The two entry-point groups the host framework consumes.
///
/// Parses from either the full group identifier or the short CLI spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum Group {
    #[strum(to_string = "pybamm_models", serialize = "models")]
    #[serde(rename = "pybamm_models")]
    Models,
    #[strum(
        to_string = "pybamm_parameter_sets",
        serialize = "parameter-sets",
        serialize = "parameter_sets"
    )]
    #[serde(rename = "pybamm_parameter_sets")]
    ParameterSets,
}

impl Group {
    /// The group identifier as registered by plugin crates.
    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Models => MODELS_GROUP,
            Group::ParameterSets => PARAMETER_SETS_GROUP,
        }
    }
}

/// What a resolved component is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
pub enum ComponentKind {
    Model,
    ParameterSet,
}
