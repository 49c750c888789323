//! Configuration for the hetero compile-time benchmarks.
//!
//! Load benchmark configuration from TOML or YAML files to choose the
//! compiler, the generated program sizes and the templates to measure
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use hetero_config::{BenchConfig, TemplateSpec};
//!
//! let config = BenchConfig::from_toml_str(r#"
//!     name = "tuples"
//!     run_count = 5
//!     sizes = [1, 10, 50]
//!     templates = ["take_while", { name = "mine", path = "mine.rs.tmpl" }]
//!
//!     [externs]
//!     hetero = "target/release/libhetero.rlib"
//! "#).unwrap();
//!
//! assert_eq!(config.run_count, 5);
//! assert_eq!(config.sizes, vec![1, 10, 50]);
//! assert_eq!(config.templates[0], TemplateSpec::Builtin("take_while".into()));
//! assert!(config.validate().is_ok());
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use hetero_config::BenchConfig;
//!
//! let config = BenchConfig::load("bench.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Editions accepted by `rustc --edition`.
pub const EDITIONS: [&str; 4] = ["2015", "2018", "2021", "2024"];

/// Values accepted by `rustc -C opt-level`.
pub const OPT_LEVELS: [&str; 6] = ["0", "1", "2", "3", "s", "z"];

/// Main benchmark configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BenchConfig {
    /// Name of the benchmark suite, used in report titles.
    pub name: String,

    /// Compiler executable.
    pub rustc: PathBuf,

    /// Edition passed to the compiler.
    pub edition: String,

    /// Optimization level passed to the compiler.
    pub opt_level: String,

    /// Unmeasured compilations before each measurement series.
    pub warmup_count: usize,

    /// Measured compilations per template and size.
    pub run_count: usize,

    /// Element counts of the generated tuples.
    pub sizes: Vec<usize>,

    /// Templates to measure. Empty means every built-in template.
    pub templates: Vec<TemplateSpec>,

    /// Extra `-L` search paths.
    pub library_paths: Vec<PathBuf>,

    /// `--extern name=path` pairs.
    pub externs: BTreeMap<String, PathBuf>,

    /// Directory receiving the generated sources and binaries.
    pub work_dir: PathBuf,

    /// Where to write the CSV report, if anywhere.
    pub csv_output: Option<PathBuf>,

    /// Where to write the Markdown report, if anywhere.
    pub markdown_output: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            name: "hetero".to_string(),
            rustc: PathBuf::from("rustc"),
            edition: "2021".to_string(),
            opt_level: "0".to_string(),
            warmup_count: 1,
            run_count: 3,
            sizes: vec![1, 5, 10, 20, 50],
            templates: Vec::new(),
            library_paths: Vec::new(),
            externs: BTreeMap::new(),
            work_dir: PathBuf::from("target/hetero-bench"),
            csv_output: None,
            markdown_output: None,
        }
    }
}

impl BenchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension
    /// (`.yaml`/`.yml` for YAML, anything else for TOML).
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or can't be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the suite name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the compiler executable.
    pub fn with_rustc(mut self, rustc: impl Into<PathBuf>) -> Self {
        self.rustc = rustc.into();
        self
    }

    /// Sets the optimization level.
    pub fn with_opt_level(mut self, level: impl Into<String>) -> Self {
        self.opt_level = level.into();
        self
    }

    /// Sets the warmup and measured run counts.
    pub fn with_runs(mut self, warmup_count: usize, run_count: usize) -> Self {
        self.warmup_count = warmup_count;
        self.run_count = run_count;
        self
    }

    /// Replaces the measured sizes.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    /// Adds a template.
    pub fn with_template(mut self, template: TemplateSpec) -> Self {
        self.templates.push(template);
        self
    }

    /// Adds a `-L` search path.
    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_paths.push(path.into());
        self
    }

    /// Adds an `--extern` crate.
    pub fn with_extern(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.externs.insert(name.into(), path.into());
        self
    }

    /// Sets the working directory.
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    /// Sets the CSV report path.
    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_output = Some(path.into());
        self
    }

    /// Sets the Markdown report path.
    pub fn with_markdown_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.markdown_output = Some(path.into());
        self
    }

    /// Checks the values a compiler invocation depends on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run_count == 0 {
            return Err(ConfigError::Invalid("run_count must be at least 1".into()));
        }
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("sizes must not be empty".into()));
        }
        if !EDITIONS.contains(&self.edition.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown edition {:?}, expected one of {:?}",
                self.edition, EDITIONS
            )));
        }
        if !OPT_LEVELS.contains(&self.opt_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown opt_level {:?}, expected one of {:?}",
                self.opt_level, OPT_LEVELS
            )));
        }
        let mut seen = Vec::new();
        for template in &self.templates {
            let name = template.name();
            if name.is_empty() {
                return Err(ConfigError::Invalid("template names must not be empty".into()));
            }
            if seen.contains(&name) {
                return Err(ConfigError::Invalid(format!("template {name:?} listed twice")));
            }
            seen.push(name);
        }
        Ok(())
    }
}

/// A template to measure: a built-in one by name, or a custom file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TemplateSpec {
    /// One of the built-in templates.
    Builtin(String),

    /// A template read from `path`, reported as `name`.
    File { name: String, path: PathBuf },
}

impl TemplateSpec {
    /// Name used in reports and generated file names.
    pub fn name(&self) -> &str {
        match self {
            TemplateSpec::Builtin(name) => name,
            TemplateSpec::File { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests;
