// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Reservoir - inspect the battery models and parameter sets registered as
//! entry points.
//!
//! This is the binary entry point. It loads configuration, builds the
//! process-wide registries from the configured discovery sources, and runs
//! one subcommand against them.

mod commands;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use reservoir_config::RegistryConfig;
use reservoir_core::{Group, ModelDefinition, ParameterSet, RegistryError};
use reservoir_plugin::{ChainSource, InventorySource, ManifestSource, Registries};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::CommandError;

/// Reservoir - inspect registered battery models and parameter sets.
#[derive(Parser, Debug)]
#[command(name = "reservoir", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered entry point names.
    List {
        /// Only list this group (`models` or `parameter-sets`).
        group: Option<Group>,
        /// Also show whether each entry has been loaded.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the documentation of an entry point.
    Doc {
        /// `models` or `parameter-sets`.
        group: Group,
        name: String,
    },
    /// Print the equations of a model.
    Show { model: String },
    /// Print the values of a parameter set.
    Params {
        parameter_set: String,
        /// Evaluate function parameters at this point.
        #[arg(long, allow_negative_numbers = true)]
        at: Option<f64>,
    },
    /// Report parameters a model reads that a parameter set lacks.
    Check { model: String, parameter_set: String },
}

fn main() -> ExitCode {
    link_bundled_plugins();
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => reservoir_config::load_and_validate_path(path),
        None => reservoir_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            reservoir_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log.level, !cli.plain && std::io::stderr().is_terminal());
    if cli.json || cli.plain || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let installed = build_registries(&config.registry).and_then(reservoir_plugin::init);
    if let Err(err) = installed {
        eprintln!("{} {err}", "error:".red().bold());
        return ExitCode::FAILURE;
    }

    match run(cli.command, reservoir_plugin::registries(), cli.json) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Keep the bundled example plugin's link-time registrations in the binary.
fn link_bundled_plugins() {
    std::hint::black_box(reservoir_example::reservoir as fn() -> ModelDefinition);
    std::hint::black_box(reservoir_example::reservoir_parameters as fn() -> ParameterSet);
}

/// Initialize the tracing subscriber on stderr so JSON on stdout stays clean.
fn init_tracing(log_level: &str, ansi: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level))
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` if set, otherwise `log_level` for the workspace crates.
fn log_filter(log_level: &str) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reservoir={log_level},warn")))
}

/// Build both registries from the sources `config` enables.
///
/// Manifests are chained after the link-time table, so a manifest entry
/// overrides a registered one of the same name.
fn build_registries(config: &RegistryConfig) -> Result<Registries, RegistryError> {
    let mut source = ChainSource::new();
    if config.inventory {
        source = source.with(InventorySource);
    }
    if !config.manifests.is_empty() {
        source = source.with(ManifestSource::from_paths(config.manifests.as_slice())?);
    }
    debug!(sources = source.len(), "discovering entry points");

    let registries = Registries::discover_groups(
        &config.models_group,
        &config.parameter_sets_group,
        &source,
    )?;
    info!(
        models = registries.models.len(),
        parameter_sets = registries.parameter_sets.len(),
        "discovered entry points"
    );
    Ok(registries)
}

fn run(command: Commands, registries: &Registries, json: bool) -> Result<ExitCode, CommandError> {
    match command {
        Commands::List { group, verbose } => {
            let listings = commands::list(registries, group, verbose);
            emit(json, &listings, |l| commands::render_list(l));
        }
        Commands::Doc { group, name } => {
            let report = commands::doc(registries, group, &name)?;
            emit(json, &report, |r| format!("{}\n", r.doc.trim_matches('\n')));
        }
        Commands::Show { model } => {
            let model = commands::show(registries, &model)?;
            emit(json, &model, |m| m.to_string());
        }
        Commands::Params { parameter_set, at } => {
            let report = commands::params(registries, &parameter_set, at)?;
            emit(json, &report, commands::render_params);
        }
        Commands::Check {
            model,
            parameter_set,
        } => {
            let report = commands::check(registries, &model, &parameter_set)?;
            emit(json, &report, commands::render_check);
            if !report.passed() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn emit<T: Serialize>(json: bool, report: &T, render: impl FnOnce(&T) -> String) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print!("{}", render(report));
    }
}
