// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Entry-point references and the link-time registration table.
//!
//! Plugin crates advertise components with [`submit_entry_point!`]; the
//! resulting [`EntryPointDecl`] records are collected by `inventory` and read
//! back by [`crate::InventorySource`]. [`submit_export!`] publishes a component
//! under a target path so entry-point manifests can refer to it by name.

use std::fmt;
use std::sync::Arc;

use reservoir_core::{Component, LoadError};

/// A component constructor.
pub type LoadFn = fn() -> Result<Arc<dyn Component>, LoadError>;

/// A boxed loader, for references built at runtime.
pub type Loader = Arc<dyn Fn() -> Result<Arc<dyn Component>, LoadError> + Send + Sync>;

/// What an entry point points at.
#[derive(Clone)]
pub enum EntryTarget {
    /// Materialized on first access by calling the loader.
    Loader(Loader),
    /// Already a concrete component; resolves to itself.
    Value(Arc<dyn Component>),
}

impl EntryTarget {
    pub fn loader<F>(f: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn Component>, LoadError> + Send + Sync + 'static,
    {
        EntryTarget::Loader(Arc::new(f))
    }

    pub fn value<C: Component + 'static>(component: C) -> Self {
        EntryTarget::Value(Arc::new(component))
    }

    /// Turn the reference into its component.
    pub(crate) fn resolve(&self) -> Result<Arc<dyn Component>, LoadError> {
        match self {
            EntryTarget::Loader(load) => load(),
            EntryTarget::Value(component) => Ok(Arc::clone(component)),
        }
    }
}

impl fmt::Debug for EntryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryTarget::Loader(_) => f.write_str("Loader(..)"),
            EntryTarget::Value(component) => f.debug_tuple("Value").field(component).finish(),
        }
    }
}

/// A named reference to a component within a group.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    pub group: String,
    pub name: String,
    pub target: EntryTarget,
}

impl EntryPoint {
    pub fn new(group: impl Into<String>, name: impl Into<String>, target: EntryTarget) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            target,
        }
    }
}

/// A statically registered entry point.
#[derive(Debug)]
pub struct EntryPointDecl {
    pub group: &'static str,
    pub name: &'static str,
    pub load: LoadFn,
}

impl EntryPointDecl {
    pub const fn new(group: &'static str, name: &'static str, load: LoadFn) -> Self {
        Self { group, name, load }
    }

    pub fn to_entry_point(&self) -> EntryPoint {
        let load = self.load;
        EntryPoint::new(self.group, self.name, EntryTarget::Loader(Arc::new(load)))
    }
}

inventory::collect!(EntryPointDecl);

/// A component published under a `module::path:Attr` target path.
#[derive(Debug)]
pub struct Export {
    pub path: &'static str,
    pub load: LoadFn,
}

impl Export {
    pub const fn new(path: &'static str, load: LoadFn) -> Self {
        Self { path, load }
    }
}

inventory::collect!(Export);

/// Look up an exported target and construct it.
pub fn load_export(path: &str) -> Result<Arc<dyn Component>, LoadError> {
    let export = inventory::iter::<Export>
        .into_iter()
        .find(|export| export.path == path)
        .ok_or_else(|| LoadError::UnresolvedTarget {
            target: path.to_string(),
        })?;
    (export.load)()
}

/// Register a component under an entry-point group.
///
/// ```ignore
/// reservoir_plugin::submit_entry_point!(MODELS_GROUP, "Reservoir", load_reservoir);
/// ```
#[macro_export]
macro_rules! submit_entry_point {
    ($group:expr, $name:expr, $load:path) => {
        $crate::inventory::submit! {
            $crate::EntryPointDecl::new($group, $name, $load)
        }
    };
}

/// Publish a component under a target path for entry-point manifests.
#[macro_export]
macro_rules! submit_export {
    ($path:expr, $load:path) => {
        $crate::inventory::submit! {
            $crate::Export::new($path, $load)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservoir_core::ModelDefinition;

    fn load_exported() -> Result<Arc<dyn Component>, LoadError> {
        Ok(Arc::new(ModelDefinition::new("Exported")))
    }

    crate::submit_export!("reservoir_plugin::tests:Exported", load_exported);

    #[test]
    fn load_export_finds_published_target() {
        let component = load_export("reservoir_plugin::tests:Exported").unwrap();
        assert_eq!(component.as_model().unwrap().name, "Exported");
    }

    #[test]
    fn load_export_reports_unknown_target() {
        let err = load_export("reservoir_plugin::tests:Nope").unwrap_err();
        assert!(matches!(err, LoadError::UnresolvedTarget { target } if target.ends_with(":Nope")));
    }

    #[test]
    fn value_targets_resolve_to_themselves() {
        let target = EntryTarget::value(ModelDefinition::new("Concrete"));
        let first = target.resolve().unwrap();
        let second = target.resolve().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn decl_converts_to_loader_reference() {
        let decl = EntryPointDecl::new("group", "Exported", load_exported);
        let entry = decl.to_entry_point();
        assert_eq!(entry.group, "group");
        assert_eq!(entry.name, "Exported");
        assert!(matches!(entry.target, EntryTarget::Loader(_)));
        assert_eq!(format!("{:?}", entry.target), "Loader(..)");
    }
}
