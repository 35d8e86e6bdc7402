// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Parameter sets: named tables of constants and one-argument functions.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A single parameter value.
#[derive(Debug, Clone)]
pub enum ParameterValue {
    Scalar(f64),
    Text(String),
    /// A function of one variable (time, stoichiometry, ...).
    Function(fn(f64) -> f64),
    List(Vec<String>),
}

impl ParameterValue {
    /// Value at `x`: functions are evaluated, scalars are constant.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        match self {
            ParameterValue::Scalar(v) => Some(*v),
            ParameterValue::Function(f) => Some(f(x)),
            ParameterValue::Text(_) | ParameterValue::List(_) => None,
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterValue::Scalar(v) => write!(f, "{v}"),
            ParameterValue::Text(s) => write!(f, "{s}"),
            ParameterValue::Function(_) => write!(f, "<function>"),
            ParameterValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl Serialize for ParameterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParameterValue::Scalar(v) => serializer.serialize_f64(*v),
            ParameterValue::Text(s) => serializer.serialize_str(s),
            ParameterValue::Function(_) => serializer.serialize_str("<function>"),
            ParameterValue::List(items) => items.serialize(serializer),
        }
    }
}

/// Insertion-ordered parameter table.
///
/// Re-inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct ParameterValues {
    entries: Vec<(String, ParameterValue)>,
}

impl ParameterValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParameterValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The value of a scalar parameter, `None` if absent or not a scalar.
    pub fn scalar(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            ParameterValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// Evaluate a parameter at `x`. See [`ParameterValue::evaluate`].
    pub fn evaluate(&self, name: &str, x: f64) -> Option<f64> {
        self.get(name)?.evaluate(x)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ParameterValue)> for ParameterValues {
    fn from_iter<I: IntoIterator<Item = (K, ParameterValue)>>(iter: I) -> Self {
        let mut values = ParameterValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl Serialize for ParameterValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A named parameter set as advertised under the parameter-sets group.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSet {
    pub name: String,
    #[serde(skip)]
    pub doc: Option<String>,
    pub values: ParameterValues,
}

impl ParameterSet {
    pub fn new(name: impl Into<String>, values: ParameterValues) -> Self {
        Self {
            name: name.into(),
            doc: None,
            values,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(x: f64) -> f64 {
        2.0 * x
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut values = ParameterValues::new();
        values.insert("a", ParameterValue::Scalar(1.0));
        values.insert("b", ParameterValue::Scalar(2.0));
        values.insert("a", ParameterValue::Scalar(3.0));

        let names: Vec<&str> = values.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(values.scalar("a"), Some(3.0));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn evaluate_scalars_and_functions() {
        let values: ParameterValues = [
            ("k", ParameterValue::Scalar(0.1)),
            ("f", ParameterValue::Function(double)),
            ("chemistry", ParameterValue::Text("lithium_ion".into())),
        ]
        .into_iter()
        .collect();

        assert_eq!(values.evaluate("k", 42.0), Some(0.1));
        assert_eq!(values.evaluate("f", 1.5), Some(3.0));
        assert_eq!(values.evaluate("chemistry", 0.0), None);
        assert_eq!(values.evaluate("missing", 0.0), None);
        assert_eq!(values.scalar("f"), None);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let values: ParameterValues = [
            ("z", ParameterValue::Scalar(1.0)),
            ("a", ParameterValue::List(vec!["cite".into()])),
            ("f", ParameterValue::Function(double)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"z":1.0,"a":["cite"],"f":"<function>"}"#);
    }

    #[test]
    fn display_values() {
        assert_eq!(ParameterValue::Scalar(0.9).to_string(), "0.9");
        assert_eq!(ParameterValue::Function(double).to_string(), "<function>");
        assert_eq!(
            ParameterValue::List(vec!["a".into(), "b".into()]).to_string(),
            "[a, b]"
        );
    }
}
