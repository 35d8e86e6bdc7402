// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! `reservoir` subcommand implementations.
//!
//! Each command builds a serializable report from the registries. `main`
//! prints it as JSON with `--json`, otherwise through the `render_*`
//! functions here.

use std::fmt::Write as _;
use std::sync::Arc;

use colored::Colorize;
use reservoir_core::{
    Component, ComponentKind, Group, ModelDefinition, ParameterValue, RegistryError,
};
use reservoir_plugin::{EntryPoints, Registries};
use serde::Serialize;
use thiserror::Error;

/// Failures a subcommand reports to the user.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{source}\navailable in {group}: {available}")]
    Unknown {
        group: String,
        available: String,
        source: RegistryError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("`{name}` in {group} is not a {expected}")]
    WrongKind {
        name: String,
        group: String,
        expected: ComponentKind,
    },
}

/// Attach the registry's available names to a `NotFound` error.
fn explain(registry: &EntryPoints, err: RegistryError) -> CommandError {
    match err {
        RegistryError::NotFound { .. } => {
            let names: Vec<&str> = registry.names().collect();
            CommandError::Unknown {
                group: registry.group().to_string(),
                available: if names.is_empty() {
                    "(none)".to_string()
                } else {
                    names.join(", ")
                },
                source: err,
            }
        }
        other => other.into(),
    }
}

fn lookup(registry: &EntryPoints, name: &str) -> Result<Arc<dyn Component>, CommandError> {
    registry.get(name).map_err(|err| explain(registry, err))
}

// --- list ---

#[derive(Debug, Serialize)]
pub struct GroupListing {
    pub group: String,
    pub entries: Vec<ListedEntry>,
}

#[derive(Debug, Serialize)]
pub struct ListedEntry {
    pub name: String,
    /// Whether the entry has been loaded, reported with `--verbose`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded: Option<bool>,
}

/// Names per group, without loading anything.
pub fn list(registries: &Registries, group: Option<Group>, verbose: bool) -> Vec<GroupListing> {
    let groups = match group {
        Some(group) => vec![group],
        None => vec![Group::Models, Group::ParameterSets],
    };

    groups
        .into_iter()
        .map(|group| {
            let registry = registries.get(group);
            GroupListing {
                group: registry.group().to_string(),
                entries: registry
                    .names()
                    .map(|name| ListedEntry {
                        name: name.to_string(),
                        loaded: verbose.then(|| registry.is_resolved(name)),
                    })
                    .collect(),
            }
        })
        .collect()
}

pub fn render_list(listings: &[GroupListing]) -> String {
    let mut out = String::new();
    for listing in listings {
        let _ = writeln!(out, "{} ({})", listing.group.bold(), listing.entries.len());
        if listing.entries.is_empty() {
            let _ = writeln!(out, "  {}", "(none)".dimmed());
        }
        for entry in &listing.entries {
            match entry.loaded {
                Some(true) => {
                    let _ = writeln!(out, "  {} {}", entry.name, "[loaded]".green());
                }
                Some(false) => {
                    let _ = writeln!(out, "  {} {}", entry.name, "[not loaded]".dimmed());
                }
                None => {
                    let _ = writeln!(out, "  {}", entry.name);
                }
            }
        }
    }
    out
}

// --- doc ---

#[derive(Debug, Serialize)]
pub struct DocReport {
    pub group: String,
    pub name: String,
    pub doc: String,
}

/// Dedented documentation of one entry.
pub fn doc(registries: &Registries, group: Group, name: &str) -> Result<DocReport, CommandError> {
    let registry = registries.get(group);
    let doc = registry
        .get_docstring(name)
        .map_err(|err| explain(registry, err))?;
    Ok(DocReport {
        group: registry.group().to_string(),
        name: name.to_string(),
        doc,
    })
}

// --- show ---

/// The model registered under `name`.
pub fn show(registries: &Registries, name: &str) -> Result<ModelDefinition, CommandError> {
    let component = lookup(&registries.models, name)?;
    component
        .as_model()
        .cloned()
        .ok_or_else(|| CommandError::WrongKind {
            name: name.to_string(),
            group: registries.models.group().to_string(),
            expected: ComponentKind::Model,
        })
}

// --- params ---

#[derive(Debug, Serialize)]
pub struct ParamsReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<f64>,
    pub values: Vec<ParamRow>,
}

#[derive(Debug, Serialize)]
pub struct ParamRow {
    pub name: String,
    pub value: ParameterValue,
    /// Function value at `--at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated: Option<f64>,
}

/// Parameter table of the set registered under `name`.
pub fn params(
    registries: &Registries,
    name: &str,
    at: Option<f64>,
) -> Result<ParamsReport, CommandError> {
    let component = lookup(&registries.parameter_sets, name)?;
    let set = component
        .as_parameter_set()
        .ok_or_else(|| CommandError::WrongKind {
            name: name.to_string(),
            group: registries.parameter_sets.group().to_string(),
            expected: ComponentKind::ParameterSet,
        })?;

    let values = set
        .values
        .iter()
        .map(|(param, value)| ParamRow {
            name: param.to_string(),
            value: value.clone(),
            evaluated: match (value, at) {
                (ParameterValue::Function(_), Some(x)) => value.evaluate(x),
                _ => None,
            },
        })
        .collect();

    Ok(ParamsReport {
        name: set.name.clone(),
        at,
        values,
    })
}

pub fn render_params(report: &ParamsReport) -> String {
    let width = report
        .values
        .iter()
        .map(|row| row.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}", report.name.bold());
    for row in &report.values {
        let value = match (row.evaluated, report.at) {
            (Some(y), Some(x)) => format!("{y} {}", format!("(at {x})").dimmed()),
            _ => row.value.to_string(),
        };
        let _ = writeln!(out, "  {:<width$}  {value}", row.name);
    }
    out
}

// --- check ---

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub model: String,
    pub parameter_set: String,
    pub missing: Vec<String>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Parameters `model` reads that `parameter_set` does not define.
pub fn check(
    registries: &Registries,
    model: &str,
    parameter_set: &str,
) -> Result<CheckReport, CommandError> {
    let definition = show(registries, model)?;
    let component = lookup(&registries.parameter_sets, parameter_set)?;
    let set = component
        .as_parameter_set()
        .ok_or_else(|| CommandError::WrongKind {
            name: parameter_set.to_string(),
            group: registries.parameter_sets.group().to_string(),
            expected: ComponentKind::ParameterSet,
        })?;

    Ok(CheckReport {
        model: model.to_string(),
        parameter_set: parameter_set.to_string(),
        missing: definition.missing_parameters(set),
    })
}

pub fn render_check(report: &CheckReport) -> String {
    let mut out = String::new();
    if report.passed() {
        let _ = writeln!(
            out,
            "{} {} provides every parameter {} reads",
            "✓".green(),
            report.parameter_set,
            report.model
        );
    } else {
        let _ = writeln!(
            out,
            "{} {} is missing {} parameter(s) required by {}:",
            "✗".red(),
            report.parameter_set,
            report.missing.len(),
            report.model
        );
        for name in &report.missing {
            let _ = writeln!(out, "  - {name}");
        }
    }
    out
}
