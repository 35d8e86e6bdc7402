// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Lazily discovered process-wide registries backed by link-time registration.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use reservoir_core::{
    Component, LoadError, MODELS_GROUP, ModelDefinition, PARAMETER_SETS_GROUP, ParameterSet,
    ParameterValues,
};
use reservoir_plugin::{models, parameter_sets, resolve_model, submit_entry_point};

static SPM_LOADS: AtomicUsize = AtomicUsize::new(0);

fn load_spm() -> Result<Arc<dyn Component>, LoadError> {
    SPM_LOADS.fetch_add(1, Ordering::SeqCst);
    Ok(Arc::new(
        ModelDefinition::new("SPM").with_doc("\n    Single Particle Model.\n    "),
    ))
}

fn load_chen() -> Result<Arc<dyn Component>, LoadError> {
    Ok(Arc::new(ParameterSet::new("Chen2020", ParameterValues::new())))
}

fn load_broken() -> Result<Arc<dyn Component>, LoadError> {
    Err(LoadError::failed("broken plugin"))
}

submit_entry_point!(MODELS_GROUP, "SPM", load_spm);
submit_entry_point!(MODELS_GROUP, "Broken", load_broken);
submit_entry_point!(PARAMETER_SETS_GROUP, "Chen2020", load_chen);

#[test]
fn groups_are_discovered_independently() {
    assert!(models().contains("SPM"));
    assert!(models().contains("Broken"));
    assert!(!models().contains("Chen2020"));

    assert!(parameter_sets().contains("Chen2020"));
    assert!(!parameter_sets().contains("SPM"));
    assert_eq!(parameter_sets().len(), parameter_sets().names().count());
}

#[test]
fn resolve_model_caches_the_loaded_model() {
    let first = resolve_model("SPM").unwrap();
    let second = resolve_model("SPM").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(SPM_LOADS.load(Ordering::SeqCst), 1);
    assert_eq!(
        models().get_docstring("SPM").unwrap(),
        "\nSingle Particle Model.\n"
    );
}

#[test]
fn loader_failures_reach_the_caller() {
    let err = resolve_model("Broken").unwrap_err();
    assert_eq!(err.to_string(), "broken plugin");
    assert!(!models().is_resolved("Broken"));
}
