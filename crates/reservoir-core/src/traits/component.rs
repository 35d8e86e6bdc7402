// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! The `Component` trait: what an entry point resolves to.

use std::fmt::Debug;

use crate::model::ModelDefinition;
use crate::parameters::ParameterSet;
use crate::types::ComponentKind;

/// A loaded entry-point target.
///
/// Registries hand components out as `Arc<dyn Component>`; callers narrow them
/// with [`Component::as_model`] or [`Component::as_parameter_set`].
pub trait Component: Send + Sync + Debug {
    fn kind(&self) -> ComponentKind;

    /// Documentation attached to the component, indentation as authored.
    fn doc(&self) -> Option<&str>;

    fn as_model(&self) -> Option<&ModelDefinition> {
        None
    }

    fn as_parameter_set(&self) -> Option<&ParameterSet> {
        None
    }
}

impl Component for ModelDefinition {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Model
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn as_model(&self) -> Option<&ModelDefinition> {
        Some(self)
    }
}

impl Component for ParameterSet {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ParameterSet
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn as_parameter_set(&self) -> Option<&ParameterSet> {
        Some(self)
    }
}
