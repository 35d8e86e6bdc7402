// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Example plugin registering a custom battery model and parameter set.
//!
//! Linking this crate is enough for the host framework to find them:
//!
//! ```no_run
//! use reservoir_example as _;
//!
//! let model = reservoir_plugin::resolve_model("Reservoir")?;
//! let params = reservoir_plugin::parameter_sets().get("ReservoirParameters")?;
//! # Ok::<(), reservoir_core::RegistryError>(())
//! ```

pub mod models;
pub mod ocv;
pub mod parameters;

/// The manifest describing this crate's entry points.
pub const ENTRY_POINTS_MANIFEST: &str = include_str!("../entry-points.toml");

pub use models::reservoir;
pub use parameters::reservoir_parameters;
