// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Parameter values for the Reservoir model using LG M50 cell data.

use std::sync::Arc;

use reservoir_core::{
    Component, LoadError, PARAMETER_SETS_GROUP, ParameterSet, ParameterValue, ParameterValues,
};
use reservoir_plugin::{submit_entry_point, submit_export};

use crate::ocv::{graphite_lgm50_ocp_chen2020, nmc_lgm50_ocp_chen2020};

pub const NAME: &str = "ReservoirParameters";

const DOC: &str = "
    Parameter values for a simple reservoir model using LG M50 cell data.

    The OCV curves are taken from Chen 2020; the remaining values are
    illustrative. They include a sinusoidal current function, initial
    stoichiometries, and electrode properties.

    Intended for use with the ``Reservoir`` model, not as a representative
    set for detailed cell-level physics.
";

/// Applied current [A]: `1 + 0.5 sin(100 t)`.
pub fn current_function(t: f64) -> f64 {
    1.0 + 0.5 * (100.0 * t).sin()
}

/// Build the ReservoirParameters set.
pub fn reservoir_parameters() -> ParameterSet {
    let values: ParameterValues = [
        ("chemistry", ParameterValue::Text("lithium_ion".into())),
        ("Current function [A]", ParameterValue::Function(current_function)),
        (
            "Positive electrode OCV",
            ParameterValue::Function(nmc_lgm50_ocp_chen2020),
        ),
        (
            "Negative electrode OCV",
            ParameterValue::Function(graphite_lgm50_ocp_chen2020),
        ),
        (
            "Initial negative electrode stoichiometry",
            ParameterValue::Scalar(0.9),
        ),
        (
            "Initial positive electrode stoichiometry",
            ParameterValue::Scalar(0.1),
        ),
        ("Negative electrode capacity [A.h]", ParameterValue::Scalar(1.0)),
        ("Positive electrode capacity [A.h]", ParameterValue::Scalar(1.0)),
        ("Electrode resistance [Ohm]", ParameterValue::Scalar(0.1)),
        // Metadata
        ("notcite", ParameterValue::List(vec!["ReservoirParameters".into()])),
    ]
    .into_iter()
    .collect();

    ParameterSet::new(NAME, values).with_doc(DOC)
}

fn load() -> Result<Arc<dyn Component>, LoadError> {
    Ok(Arc::new(reservoir_parameters()))
}

submit_entry_point!(PARAMETER_SETS_GROUP, NAME, load);
submit_export!("reservoir_example::parameters:ReservoirParameters", load);
