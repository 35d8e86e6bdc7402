// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Process-wide registries for the models and parameter-sets groups.
//!
//! There is exactly one registry per group for the life of the process.
//! Binaries may install explicitly built registries once at startup with
//! [`init`]; otherwise the first accessor call discovers both groups from
//! the link-time [`InventorySource`].

use std::sync::{Arc, OnceLock};

use reservoir_core::{Component, Group, RegistryError};
use tracing::info;

use crate::discovery::{DiscoverySource, InventorySource};
use crate::registry::EntryPoints;

/// The registry pair the host framework consumes.
#[derive(Debug)]
pub struct Registries {
    pub models: EntryPoints,
    pub parameter_sets: EntryPoints,
}

impl Registries {
    /// Discover both default groups from `source`.
    pub fn discover(source: &dyn DiscoverySource) -> Result<Self, RegistryError> {
        Self::discover_groups(Group::Models.as_str(), Group::ParameterSets.as_str(), source)
    }

    /// Discover registries for explicitly named groups.
    pub fn discover_groups(
        models_group: &str,
        parameter_sets_group: &str,
        source: &dyn DiscoverySource,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            models: EntryPoints::discover(models_group, source)?,
            parameter_sets: EntryPoints::discover(parameter_sets_group, source)?,
        })
    }

    /// Discover both default groups from the link-time registration table.
    pub fn from_inventory() -> Self {
        let source = InventorySource;
        Self {
            models: EntryPoints::build(
                Group::Models.as_str().to_string(),
                source.entry_points(Group::Models.as_str()),
            ),
            parameter_sets: EntryPoints::build(
                Group::ParameterSets.as_str().to_string(),
                source.entry_points(Group::ParameterSets.as_str()),
            ),
        }
    }

    pub fn get(&self, group: Group) -> &EntryPoints {
        match group {
            Group::Models => &self.models,
            Group::ParameterSets => &self.parameter_sets,
        }
    }
}

static REGISTRIES: OnceLock<Registries> = OnceLock::new();

/// Install the process-wide registries. Fails if they already exist.
pub fn init(registries: Registries) -> Result<(), RegistryError> {
    let (models, parameter_sets) = (registries.models.len(), registries.parameter_sets.len());
    REGISTRIES
        .set(registries)
        .map_err(|_| RegistryError::AlreadyInitialized)?;
    info!(models, parameter_sets, "entry point registries initialized");
    Ok(())
}

/// The process-wide registries, discovered from inventory on first use.
pub fn registries() -> &'static Registries {
    REGISTRIES.get_or_init(Registries::from_inventory)
}

/// The shared models registry.
pub fn models() -> &'static EntryPoints {
    &registries().models
}

/// The shared parameter-sets registry.
pub fn parameter_sets() -> &'static EntryPoints {
    &registries().parameter_sets
}

/// Look up a model by name in the shared models registry.
pub fn resolve_model(name: &str) -> Result<Arc<dyn Component>, RegistryError> {
    models().get(name)
}
