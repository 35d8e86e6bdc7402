// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Entry-point manifests.
//!
//! A manifest maps entry-point names to target paths, grouped the same way
//! packaging metadata groups them:
//!
//! ```toml
//! [entry-points.pybamm_models]
//! Reservoir = "reservoir_example::models:Reservoir"
//! ```
//!
//! Target paths are checked for shape when the manifest is parsed, but only
//! resolved against the exported symbols (see [`crate::submit_export!`]) when
//! the entry point is first requested.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use reservoir_core::{LoadError, RegistryError};
use serde::Deserialize;
use tracing::debug;

use crate::discovery::DiscoverySource;
use crate::entry_point::{EntryPoint, EntryTarget, load_export};

/// A `module::path:Attr` reference to an exported component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    pub module: String,
    pub attr: String,
}

impl FromStr for TargetPath {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LoadError::InvalidTarget {
            target: s.to_string(),
        };
        let (module, attr) = s.trim().rsplit_once(':').ok_or_else(invalid)?;
        let module_ok = !module.is_empty()
            && module
                .split("::")
                .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_alphanumeric() || c == '_'));
        let attr_ok = !attr.is_empty() && attr.chars().all(|c| c.is_alphanumeric() || c == '_');
        if !module_ok || !attr_ok {
            return Err(invalid());
        }
        Ok(Self {
            module: module.to_string(),
            attr: attr.to_string(),
        })
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.attr)
    }
}

/// On-disk manifest layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(rename = "entry-points", default)]
    entry_points: BTreeMap<String, BTreeMap<String, String>>,
}

/// A parsed entry-point manifest.
#[derive(Debug, Clone, Default)]
pub struct EntryPointManifest {
    groups: BTreeMap<String, Vec<(String, TargetPath)>>,
}

impl EntryPointManifest {
    /// Group names declared by the manifest.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// `(name, target)` pairs declared for `group`.
    pub fn entries(&self, group: &str) -> &[(String, TargetPath)] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Parse a manifest from TOML content.
///
/// Rejects empty group or entry names and malformed target paths.
pub fn parse_entry_point_manifest(toml_content: &str) -> Result<EntryPointManifest, RegistryError> {
    let file: ManifestFile =
        toml::from_str(toml_content).map_err(|e| RegistryError::Manifest(e.to_string()))?;

    let mut groups = BTreeMap::new();
    for (group, entries) in file.entry_points {
        if group.trim().is_empty() {
            return Err(RegistryError::Manifest(
                "entry point group must not be empty".to_string(),
            ));
        }
        let mut parsed = Vec::with_capacity(entries.len());
        for (name, target) in entries {
            if name.trim().is_empty() {
                return Err(RegistryError::Manifest(format!(
                    "empty entry point name in group `{group}`"
                )));
            }
            let target = target
                .parse::<TargetPath>()
                .map_err(|e| RegistryError::Manifest(format!("{group}.{name}: {e}")))?;
            parsed.push((name, target));
        }
        groups.insert(group, parsed);
    }

    Ok(EntryPointManifest { groups })
}

/// Discovery backed by one or more entry-point manifests.
#[derive(Debug, Clone, Default)]
pub struct ManifestSource {
    manifests: Vec<EntryPointManifest>,
}

impl ManifestSource {
    pub fn new(manifests: Vec<EntryPointManifest>) -> Self {
        Self { manifests }
    }

    pub fn parse(toml_content: &str) -> Result<Self, RegistryError> {
        Ok(Self::new(vec![parse_entry_point_manifest(toml_content)?]))
    }

    /// Read and parse every manifest in `paths`, in order.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, RegistryError> {
        let mut manifests = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path).map_err(|e| {
                RegistryError::Manifest(format!("failed to read {}: {e}", path.display()))
            })?;
            debug!(path = %path.display(), "loaded entry point manifest");
            manifests.push(parse_entry_point_manifest(&content)?);
        }
        Ok(Self::new(manifests))
    }
}

impl DiscoverySource for ManifestSource {
    fn discover(&self, group: &str) -> Result<Vec<EntryPoint>, RegistryError> {
        Ok(self
            .manifests
            .iter()
            .flat_map(|manifest| manifest.entries(group))
            .map(|(name, target)| {
                let target = target.to_string();
                let load = EntryTarget::loader(move || load_export(&target));
                EntryPoint::new(group, name.clone(), load)
            })
            .collect())
    }
}
