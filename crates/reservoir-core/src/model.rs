// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Symbolic model descriptions handed to the host framework.
//!
//! Expressions are kept as strings; the host framework owns the algebra and
//! the solver. This type only records what a model declares so it can be
//! listed, displayed, and checked against a parameter set.

use serde::Serialize;

use crate::parameters::ParameterSet;

/// `lhs = rhs`, or `d(lhs)/dt = rhs` when used in [`ModelDefinition::rhs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equation {
    pub lhs: String,
    pub rhs: String,
}

/// A termination event, triggered when `expression` crosses zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub name: String,
    pub expression: String,
}

/// Whether a parameter is a plain constant or a function of other variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterRef {
    Constant { name: String },
    Function { name: String, inputs: Vec<String> },
}

impl ParameterRef {
    pub fn name(&self) -> &str {
        match self {
            ParameterRef::Constant { name } | ParameterRef::Function { name, .. } => name,
        }
    }
}

/// A model as a set of ODEs, initial conditions, output variables, and events.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelDefinition {
    pub name: String,
    #[serde(skip)]
    pub doc: Option<String>,
    /// Short symbol → full variable name.
    pub states: Vec<Equation>,
    pub parameters: Vec<ParameterRef>,
    pub rhs: Vec<Equation>,
    pub initial_conditions: Vec<Equation>,
    pub outputs: Vec<Equation>,
    pub events: Vec<Event>,
}

impl ModelDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declare a state variable under a short symbol.
    pub fn with_state(mut self, symbol: &str, name: &str) -> Self {
        self.states.push(equation(symbol, name));
        self
    }

    pub fn with_constant(mut self, name: &str) -> Self {
        self.parameters.push(ParameterRef::Constant {
            name: name.to_string(),
        });
        self
    }

    pub fn with_function(mut self, name: &str, inputs: &[&str]) -> Self {
        self.parameters.push(ParameterRef::Function {
            name: name.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn with_rhs(mut self, state: &str, expr: &str) -> Self {
        self.rhs.push(equation(state, expr));
        self
    }

    pub fn with_initial_condition(mut self, state: &str, expr: &str) -> Self {
        self.initial_conditions.push(equation(state, expr));
        self
    }

    pub fn with_output(mut self, name: &str, expr: &str) -> Self {
        self.outputs.push(equation(name, expr));
        self
    }

    pub fn with_event(mut self, name: &str, expr: &str) -> Self {
        self.events.push(Event {
            name: name.to_string(),
            expression: expr.to_string(),
        });
        self
    }

    /// Names of every parameter the model reads.
    pub fn required_parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(ParameterRef::name)
    }

    /// Parameters the model needs that `set` does not provide, in declaration order.
    pub fn missing_parameters(&self, set: &ParameterSet) -> Vec<String> {
        self.required_parameters()
            .filter(|name| !set.values.contains(name))
            .map(str::to_string)
            .collect()
    }
}

fn equation(lhs: &str, rhs: &str) -> Equation {
    Equation {
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
    }
}

impl std::fmt::Display for ModelDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        for eq in &self.rhs {
            writeln!(f, "  d{}/dt = {}", eq.lhs, eq.rhs)?;
        }
        for eq in &self.initial_conditions {
            writeln!(f, "  {}(0) = {}", eq.lhs, eq.rhs)?;
        }
        for eq in &self.outputs {
            writeln!(f, "  {} = {}", eq.lhs, eq.rhs)?;
        }
        for event in &self.events {
            writeln!(f, "  event {:?}: {} = 0", event.name, event.expression)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{ParameterSet, ParameterValue, ParameterValues};

    fn decay() -> ModelDefinition {
        ModelDefinition::new("Decay")
            .with_state("x", "Amount")
            .with_constant("Rate")
            .with_function("Forcing", &["Time [s]"])
            .with_rhs("x", "-Rate * x + Forcing")
            .with_initial_condition("x", "1")
            .with_event("x ≤ 0", "x")
    }

    #[test]
    fn required_parameters_in_declaration_order() {
        let model = decay();
        let names: Vec<&str> = model.required_parameters().collect();
        assert_eq!(names, vec!["Rate", "Forcing"]);
    }

    #[test]
    fn missing_parameters_reports_absent_names() {
        let mut values = ParameterValues::new();
        values.insert("Rate", ParameterValue::Scalar(0.5));
        let set = ParameterSet::new("Partial", values);

        assert_eq!(decay().missing_parameters(&set), vec!["Forcing"]);
    }

    #[test]
    fn display_lists_equations_and_events() {
        let rendered = decay().to_string();
        assert!(rendered.starts_with("Decay\n"));
        assert!(rendered.contains("dx/dt = -Rate * x + Forcing"));
        assert!(rendered.contains("x(0) = 1"));
        assert!(rendered.contains("event \"x ≤ 0\": x = 0"));
    }

    #[test]
    fn parameter_ref_serializes_with_kind_tag() {
        let json = serde_json::to_value(ParameterRef::Function {
            name: "Forcing".into(),
            inputs: vec!["Time [s]".into()],
        })
        .unwrap();
        assert_eq!(json["kind"], "function");
        assert_eq!(json["inputs"][0], "Time [s]");
    }
}
