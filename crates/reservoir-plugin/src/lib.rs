// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Lazy entry-point registries for models and parameter sets.
//!
//! Plugin crates advertise components under a group with
//! [`submit_entry_point!`]. An [`EntryPoints`] registry indexes every
//! component a [`DiscoverySource`] reports for its group and loads each one
//! the first time it is requested. The process-wide registries are reached
//! through [`models`] and [`parameter_sets`].

pub mod discovery;
pub mod docstring;
pub mod entry_point;
pub mod global;
pub mod manifest;
pub mod registry;

#[doc(hidden)]
pub use inventory;

pub use discovery::{ChainSource, DiscoverySource, InventorySource, StaticSource};
pub use docstring::dedent;
pub use entry_point::{EntryPoint, EntryPointDecl, EntryTarget, Export, LoadFn, Loader};
pub use global::{Registries, init, models, parameter_sets, registries, resolve_model};
pub use manifest::{EntryPointManifest, ManifestSource, TargetPath, parse_entry_point_manifest};
pub use registry::{EntryPoints, Names};
