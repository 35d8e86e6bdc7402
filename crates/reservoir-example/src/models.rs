// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! The Reservoir model: two electrode "reservoirs" drained and filled by the
//! applied current.

use std::sync::Arc;

use reservoir_core::{Component, LoadError, MODELS_GROUP, ModelDefinition};
use reservoir_plugin::{submit_entry_point, submit_export};

pub const NAME: &str = "Reservoir";

const DOC: &str = "
    Reservoir model of a lithium-ion cell.

    Each electrode is a single well-mixed reservoir whose stoichiometry moves
    linearly with the applied current. The terminal voltage is the difference
    of the electrode open-circuit voltages minus an ohmic drop.

    Parameters are read from a set such as ``ReservoirParameters``.
";

/// Build the Reservoir model description.
pub fn reservoir() -> ModelDefinition {
    ModelDefinition::new("Reservoir model")
        .with_doc(DOC)
        .with_state("x_n", "Negative electrode stoichiometry")
        .with_state("x_p", "Positive electrode stoichiometry")
        .with_function("Current function [A]", &["Time [s]"])
        .with_constant("Initial negative electrode stoichiometry")
        .with_constant("Initial positive electrode stoichiometry")
        .with_function("Positive electrode OCV", &["x_p"])
        .with_function("Negative electrode OCV", &["x_n"])
        .with_constant("Negative electrode capacity [A.h]")
        .with_constant("Positive electrode capacity [A.h]")
        .with_constant("Electrode resistance [Ohm]")
        .with_rhs("x_n", "-i / Q_n")
        .with_rhs("x_p", "i / Q_p")
        .with_initial_condition("x_n", "x_n_0")
        .with_initial_condition("x_p", "x_p_0")
        .with_output("Negative electrode stoichiometry", "x_n")
        .with_output("Positive electrode stoichiometry", "x_p")
        .with_output("Voltage [V]", "U_p - U_n - i * R")
        .with_event("x_n ≤ 0", "x_n - 0")
        .with_event("x_n ≥ 1", "1 - x_n")
        .with_event("x_p ≤ 0", "x_p - 0")
        .with_event("x_p ≥ 1", "1 - x_p")
}

fn load() -> Result<Arc<dyn Component>, LoadError> {
    Ok(Arc::new(reservoir()))
}

submit_entry_point!(MODELS_GROUP, NAME, load);
submit_export!("reservoir_example::models:Reservoir", load);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_two_states_and_four_events() {
        let model = reservoir();
        assert_eq!(model.states.len(), 2);
        assert_eq!(model.rhs.len(), 2);
        assert_eq!(model.initial_conditions.len(), 2);
        assert_eq!(model.events.len(), 4);
        assert_eq!(model.required_parameters().count(), 8);
    }

    #[test]
    fn voltage_output_is_ocv_difference_minus_ohmic_drop() {
        let model = reservoir();
        let voltage = model
            .outputs
            .iter()
            .find(|eq| eq.lhs == "Voltage [V]")
            .unwrap();
        assert_eq!(voltage.rhs, "U_p - U_n - i * R");
    }
}
