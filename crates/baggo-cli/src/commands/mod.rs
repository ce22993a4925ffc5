//! Subcommand implementations.

use baggo_core::AssessmentConfig;
use serde::de::DeserializeOwned;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

pub mod assess;
pub mod check;
pub mod filter;
pub mod rules;

/// Errors reading command input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read.
    #[error("Failed to read file {path}: {source}")]
    Read {
        /// File path as given.
        path: String,
        /// Underlying error.
        source: io::Error,
    },
    /// Stdin could not be read.
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    /// The input is not valid JSON for the command.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and parses JSON from a file, or from stdin when no path is given.
pub fn read_json<T: DeserializeOwned>(input: Option<String>) -> Result<T, InputError> {
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path).map_err(|source| InputError::Read { path, source })?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(InputError::Stdin)?;
        buffer
    };
    Ok(serde_json::from_str(&json_str)?)
}

/// Loads the config file if one was given, else the defaults.
pub fn load_config(path: Option<&str>) -> Result<AssessmentConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(AssessmentConfig::from_file(Path::new(path))
            .map_err(|e| format!("Failed to load config {}: {}", path, e))?),
        None => Ok(AssessmentConfig::default()),
    }
}
