//! Errors surfaced to the calling environment.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for every thermoprops operation.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors that can occur while resolving, binding or evaluating a property query.
///
/// Input-validation and computation failures are produced per call. Library
/// resolution and binding failures are produced once per process and then
/// replayed, which is why the type is `Clone`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    /// A required string is blank or a required value is absent.
    #[error("{what} is missing.")]
    MissingArgument { what: &'static str },

    /// A value is not numeric, or not a one-dimensional numeric sequence.
    #[error("{what}")]
    TypeMismatch { what: String },

    /// Sequence arguments of unequal length.
    #[error("Array lengths must match. Lengths: {}", join_lengths(.lengths))]
    ShapeMismatch { lengths: Vec<(&'static str, usize)> },

    /// The native library could not be found or loaded.
    #[error(
        "{library} could not be loaded from any search path. Paths tried: {}",
        join_paths(.searched)
    )]
    LibraryNotFound {
        library: String,
        searched: Vec<PathBuf>,
    },

    /// The native library loaded but a mandatory export is absent.
    #[error(
        "Required function '{symbol}' not found in the CoolProp library. Check library version and architecture match."
    )]
    EntryPointMissing { symbol: &'static str },

    /// The engine returned NaN or an out-of-range sentinel.
    #[error("{}CoolProp failed to compute property. {message}", index_prefix(.index))]
    ComputationFailure {
        index: Option<usize>,
        message: String,
    },

    /// A string-returning engine query produced nothing.
    #[error("Failed to retrieve {what}. {message}")]
    StringQueryFailure { what: String, message: String },

    /// The mixture helper rejected its element or fraction arrays.
    #[error("Invalid mixture: {what}")]
    InvalidMixture { what: String },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PropsError {
    /// Tag a computation failure with the batch index it occurred at.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            PropsError::ComputationFailure { message, .. } => PropsError::ComputationFailure {
                index: Some(index),
                message,
            },
            other => other,
        }
    }

    /// True for failures that are cached for the process lifetime.
    pub fn is_binding_failure(&self) -> bool {
        matches!(
            self,
            PropsError::LibraryNotFound { .. } | PropsError::EntryPointMissing { .. }
        )
    }
}

fn join_lengths(lengths: &[(&'static str, usize)]) -> String {
    lengths
        .iter()
        .map(|(name, len)| format!("{name}={len}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(none)".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn index_prefix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("Error at index {i}: "),
        None => String::new(),
    }
}
