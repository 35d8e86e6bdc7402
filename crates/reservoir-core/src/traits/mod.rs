// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Traits implemented by everything an entry point can resolve to.

pub mod component;

pub use component::Component;
