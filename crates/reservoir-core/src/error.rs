// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for entry-point discovery and loading.

use thiserror::Error;

/// Errors raised by the entry-point registries.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The requested name was not discovered under the registry's group.
    #[error("Unknown parameter set or model: {name}")]
    NotFound { name: String },

    /// The entry point's loader failed. The loader's error is surfaced as-is.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The resolved component carries no documentation.
    #[error("no docstring available for `{name}`")]
    MissingDocstring { name: String },

    /// A registry was requested for an empty group identifier.
    #[error("entry point group must not be empty")]
    EmptyGroup,

    /// The process-wide registries were installed more than once.
    #[error("entry point registries are already initialized")]
    AlreadyInitialized,

    /// An entry-point manifest could not be read or parsed.
    #[error("invalid entry point manifest: {0}")]
    Manifest(String),

    /// A discovery source failed to enumerate a group.
    #[error("discovery failed for group `{group}`: {message}")]
    Discovery { group: String, message: String },
}

/// Errors raised while materializing an entry point into a component.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The target path is well-formed but nothing linked into the process exports it.
    #[error("entry point target `{target}` is not exported by any linked crate")]
    UnresolvedTarget { target: String },

    /// The target path does not have the `module::path:Attr` shape.
    #[error("malformed entry point target `{target}`, expected `module::path:Attr`")]
    InvalidTarget { target: String },

    /// The component's own constructor failed.
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl LoadError {
    /// Shorthand for a constructor failure without an underlying cause.
    pub fn failed(message: impl Into<String>) -> Self {
        LoadError::Failed {
            message: message.into(),
            source: None,
        }
    }
}
