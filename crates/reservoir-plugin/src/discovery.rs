// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Discovery sources: where registries learn which entry points exist.

use reservoir_core::RegistryError;
use tracing::debug;

use crate::entry_point::{EntryPoint, EntryPointDecl};

/// Enumerates the entry points advertised under a group.
///
/// Registries query their source once, at construction.
pub trait DiscoverySource: Send + Sync {
    fn discover(&self, group: &str) -> Result<Vec<EntryPoint>, RegistryError>;
}

/// Entry points registered at link time with [`crate::submit_entry_point!`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InventorySource;

impl InventorySource {
    /// Every linked entry point tagged with `group`, in registration order.
    pub fn entry_points(&self, group: &str) -> Vec<EntryPoint> {
        let found: Vec<EntryPoint> = inventory::iter::<EntryPointDecl>
            .into_iter()
            .filter(|decl| decl.group == group)
            .map(EntryPointDecl::to_entry_point)
            .collect();
        debug!(group, count = found.len(), "inventory discovery");
        found
    }
}

impl DiscoverySource for InventorySource {
    fn discover(&self, group: &str) -> Result<Vec<EntryPoint>, RegistryError> {
        Ok(self.entry_points(group))
    }
}

/// A fixed list of entry points held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<EntryPoint>,
}

impl StaticSource {
    pub fn new(entries: Vec<EntryPoint>) -> Self {
        Self { entries }
    }
}

impl DiscoverySource for StaticSource {
    fn discover(&self, group: &str) -> Result<Vec<EntryPoint>, RegistryError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.group == group)
            .cloned()
            .collect())
    }
}

/// Several sources queried in order; results are concatenated.
///
/// A name reported by a later source overrides the same name from an earlier
/// one once the registry indexes the combined list.
#[derive(Default)]
pub struct ChainSource {
    sources: Vec<Box<dyn DiscoverySource>>,
}

impl ChainSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl DiscoverySource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl DiscoverySource for ChainSource {
    fn discover(&self, group: &str) -> Result<Vec<EntryPoint>, RegistryError> {
        let mut all = Vec::new();
        for source in &self.sources {
            all.extend(source.discover(group)?);
        }
        Ok(all)
    }
}

impl std::fmt::Debug for ChainSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainSource")
            .field("sources", &self.sources.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::entry_point::EntryTarget;
    use reservoir_core::{Component, LoadError, ModelDefinition};

    const TEST_GROUP: &str = "reservoir_plugin_discovery_tests";

    fn load_first() -> Result<Arc<dyn Component>, LoadError> {
        Ok(Arc::new(ModelDefinition::new("First")))
    }

    fn load_second() -> Result<Arc<dyn Component>, LoadError> {
        Ok(Arc::new(ModelDefinition::new("Second")))
    }

    crate::submit_entry_point!(TEST_GROUP, "First", load_first);
    crate::submit_entry_point!(TEST_GROUP, "Second", load_second);

    fn value(group: &str, name: &str) -> EntryPoint {
        EntryPoint::new(group, name, EntryTarget::value(ModelDefinition::new(name)))
    }

    #[test]
    fn inventory_source_filters_by_group() {
        let mut names: Vec<String> = InventorySource
            .discover(TEST_GROUP)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["First", "Second"]);

        assert!(InventorySource.discover("no_such_group").unwrap().is_empty());
    }

    #[test]
    fn static_source_filters_by_group() {
        let source = StaticSource::new(vec![
            value("models", "SPM"),
            value("parameter_sets", "Chen2020"),
            value("models", "DFN"),
        ]);

        let names: Vec<String> = source
            .discover("models")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["SPM", "DFN"]);
    }

    #[test]
    fn chain_source_concatenates_in_order() {
        let chain = ChainSource::new()
            .with(StaticSource::new(vec![value("models", "SPM")]))
            .with(StaticSource::new(vec![value("models", "DFN"), value("models", "SPM")]));
        assert_eq!(chain.len(), 2);

        let names: Vec<String> = chain
            .discover("models")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["SPM", "DFN", "SPM"]);
    }

    struct FailingSource;

    impl DiscoverySource for FailingSource {
        fn discover(&self, group: &str) -> Result<Vec<EntryPoint>, RegistryError> {
            Err(RegistryError::Discovery {
                group: group.to_string(),
                message: "metadata unavailable".into(),
            })
        }
    }

    #[test]
    fn chain_source_propagates_failures() {
        let chain = ChainSource::new()
            .with(StaticSource::default())
            .with(FailingSource);
        let err = chain.discover("models").unwrap_err();
        assert!(err.to_string().contains("metadata unavailable"));
    }
}
