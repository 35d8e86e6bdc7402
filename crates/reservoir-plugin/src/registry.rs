// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Lazy entry-point registry.
//!
//! `EntryPoints` indexes every entry point a [`DiscoverySource`] reports for
//! one group. Names are fixed at construction. Each entry starts unresolved
//! and is materialized the first time it is requested; the resulting
//! component is cached and handed out by `Arc` from then on.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use reservoir_core::{Component, RegistryError};
use tracing::{debug, warn};

use crate::discovery::DiscoverySource;
use crate::docstring::dedent;
use crate::entry_point::{EntryPoint, EntryTarget};

/// Resolution state of a single entry.
enum Slot {
    Unresolved(EntryTarget),
    Resolved(Arc<dyn Component>),
}

/// Read-only, name-keyed view over the components registered under a group.
pub struct EntryPoints {
    group: String,
    names: Vec<String>,
    index: HashMap<String, usize>,
    slots: Vec<Mutex<Slot>>,
}

impl EntryPoints {
    /// Query `source` for `group` and index what it reports. Nothing is loaded.
    pub fn discover(
        group: impl Into<String>,
        source: &dyn DiscoverySource,
    ) -> Result<Self, RegistryError> {
        let group = group.into();
        if group.is_empty() {
            return Err(RegistryError::EmptyGroup);
        }
        let entries = source.discover(&group)?;
        Ok(Self::build(group, entries))
    }

    /// Index an explicit list of entry points under `group`.
    pub fn from_entry_points(
        group: impl Into<String>,
        entries: impl IntoIterator<Item = EntryPoint>,
    ) -> Result<Self, RegistryError> {
        let group = group.into();
        if group.is_empty() {
            return Err(RegistryError::EmptyGroup);
        }
        Ok(Self::build(group, entries))
    }

    pub(crate) fn build(group: String, entries: impl IntoIterator<Item = EntryPoint>) -> Self {
        let mut names = Vec::new();
        let mut index = HashMap::new();
        let mut slots = Vec::new();

        for entry in entries {
            if entry.group != group {
                continue;
            }
            match index.get(&entry.name) {
                Some(&i) => {
                    // Later registrations replace earlier ones but keep their position.
                    warn!(
                        group = %group,
                        name = %entry.name,
                        "duplicate entry point, last one wins"
                    );
                    slots[i] = Mutex::new(Slot::Unresolved(entry.target));
                }
                None => {
                    index.insert(entry.name.clone(), slots.len());
                    names.push(entry.name);
                    slots.push(Mutex::new(Slot::Unresolved(entry.target)));
                }
            }
        }

        debug!(group = %group, count = names.len(), "entry points discovered");
        Self {
            group,
            names,
            index,
            slots,
        }
    }

    /// The group this registry was built for.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Resolve `name`, loading it on first access.
    ///
    /// Once loaded the same `Arc` is returned on every call and the loader is
    /// not invoked again. A failed load leaves the entry unresolved so the next
    /// call retries.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Component>, RegistryError> {
        let slot = self.slot(name)?;

        let target = match &*lock(slot) {
            Slot::Resolved(component) => return Ok(Arc::clone(component)),
            Slot::Unresolved(target) => target.clone(),
        };

        // The loader runs without the lock held; it may itself consult registries.
        let component = target.resolve().map_err(|err| {
            warn!(group = %self.group, name, error = %err, "entry point failed to load");
            RegistryError::from(err)
        })?;

        let mut state = lock(slot);
        match &*state {
            Slot::Resolved(existing) => Ok(Arc::clone(existing)),
            Slot::Unresolved(_) => {
                debug!(group = %self.group, name, kind = %component.kind(), "resolved entry point");
                *state = Slot::Resolved(Arc::clone(&component));
                Ok(component)
            }
        }
    }

    /// Resolve `name` and return its documentation with common indentation removed.
    pub fn get_docstring(&self, name: &str) -> Result<String, RegistryError> {
        let component = self.get(name)?;
        component
            .doc()
            .map(dedent)
            .ok_or_else(|| RegistryError::MissingDocstring {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether `name` has been loaded and cached.
    pub fn is_resolved(&self, name: &str) -> bool {
        self.index
            .get(name)
            .is_some_and(|&i| matches!(&*lock(&self.slots[i]), Slot::Resolved(_)))
    }

    /// Discovered names, in discovery order.
    pub fn names(&self) -> Names<'_> {
        self.names.iter().map(String::as_str as fn(&String) -> &str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn slot(&self, name: &str) -> Result<&Mutex<Slot>, RegistryError> {
        self.index
            .get(name)
            .map(|&i| &self.slots[i])
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }
}

/// Iterator over registry names.
pub type Names<'a> = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

impl<'a> IntoIterator for &'a EntryPoints {
    type Item = &'a str;
    type IntoIter = Names<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.names()
    }
}

impl std::fmt::Debug for EntryPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryPoints")
            .field("group", &self.group)
            .field("names", &self.names)
            .finish()
    }
}

// A panicking loader never leaves a slot half-written, so poisoning is ignored.
fn lock(slot: &Mutex<Slot>) -> std::sync::MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
