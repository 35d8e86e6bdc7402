// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Core types for the Reservoir entry-point plugin.
//!
//! This crate holds the error taxonomy, the group identifiers the host
//! framework looks components up by, the [`Component`] trait every entry point
//! resolves to, and the plain-data model and parameter-set types.

pub mod error;
pub mod model;
pub mod parameters;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{LoadError, RegistryError};
pub use model::{Equation, Event, ModelDefinition, ParameterRef};
pub use parameters::{ParameterSet, ParameterValue, ParameterValues};
pub use traits::Component;
pub use types::{ComponentKind, Group, MODELS_GROUP, PARAMETER_SETS_GROUP};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::str::FromStr;

    #[test]
    fn not_found_message_names_the_key() {
        let err = RegistryError::NotFound { name: "DFN".into() };
        assert_eq!(err.to_string(), "Unknown parameter set or model: DFN");
    }

    #[test]
    fn load_errors_pass_through_unchanged() {
        let load = LoadError::UnresolvedTarget {
            target: "missing::module:Attr".into(),
        };
        let expected = load.to_string();
        let err = RegistryError::from(load);
        assert_eq!(err.to_string(), expected);
        assert!(matches!(err, RegistryError::Load(LoadError::UnresolvedTarget { .. })));
    }

    #[test]
    fn failed_load_keeps_its_source() {
        let err = LoadError::Failed {
            message: "constructor failed".into(),
            source: Some(Box::new(std::io::Error::other("disk"))),
        };
        assert_eq!(err.to_string(), "constructor failed");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk"));
        assert!(LoadError::failed("plain").source().is_none());
    }

    #[test]
    fn group_display_and_parse() {
        assert_eq!(Group::Models.to_string(), MODELS_GROUP);
        assert_eq!(Group::ParameterSets.to_string(), PARAMETER_SETS_GROUP);
        assert_eq!(Group::Models.as_str(), "pybamm_models");

        for (input, expected) in [
            ("pybamm_models", Group::Models),
            ("models", Group::Models),
            ("pybamm_parameter_sets", Group::ParameterSets),
            ("parameter-sets", Group::ParameterSets),
            ("parameter_sets", Group::ParameterSets),
        ] {
            assert_eq!(Group::from_str(input).unwrap(), expected, "{input}");
        }
        assert!(Group::from_str("solvers").is_err());
    }

    #[test]
    fn group_serialization_uses_group_identifier() {
        let json = serde_json::to_string(&Group::ParameterSets).unwrap();
        assert_eq!(json, "\"pybamm_parameter_sets\"");
        let parsed: Group = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Group::ParameterSets);
    }

    #[test]
    fn components_narrow_to_their_kind() {
        let model: Box<dyn Component> =
            Box::new(ModelDefinition::new("SPM").with_doc("Single particle model"));
        assert_eq!(model.kind(), ComponentKind::Model);
        assert_eq!(model.doc(), Some("Single particle model"));
        assert!(model.as_model().is_some());
        assert!(model.as_parameter_set().is_none());

        let set: Box<dyn Component> =
            Box::new(ParameterSet::new("Chen2020", ParameterValues::new()));
        assert_eq!(set.kind(), ComponentKind::ParameterSet);
        assert!(set.doc().is_none());
        assert_eq!(set.as_parameter_set().map(|s| s.name.as_str()), Some("Chen2020"));
    }
}
