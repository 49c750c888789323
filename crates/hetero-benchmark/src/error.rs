//! Error types for the benchmark driver.

use std::path::PathBuf;
use std::process::ExitStatus;

use hetero_config::ConfigError;
use thiserror::Error;

/// Result alias for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchmarkError>;

/// Errors raised while preparing, compiling or reporting a benchmark.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown built-in template {0:?}")]
    UnknownTemplate(String),

    #[error("Template {template:?} has unresolved placeholder {placeholder:?}")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("Failed to start compiler {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Compilation of {source_file} failed ({status}): {stderr}")]
    Compile {
        source_file: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}
