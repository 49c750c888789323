//! Compile-time benchmarks for hetero.
//!
//! This crate generates Rust programs that build heterogeneous tuples of a
//! growing size, compiles each one several times and reports how the
//! compile time scales.
//!
//! # Overview
//!
//! The benchmarking framework allows you to:
//! - Render built-in or custom program templates for every size
//! - Execute warmup compilations before measurement
//! - Collect min/avg/max compile times per template and size
//! - Export results to CSV and Markdown
//!
//! # Example
//!
//! ```
//! use hetero_benchmark::Template;
//!
//! let program = Template::builtin("make_tuple").unwrap().render(3).unwrap();
//! assert!(program.contains("make_tuple!(X::<0>, X::<1>, X::<2>)"));
//! ```
//!
//! Full benchmark usage, compiling with `rustc`:
//!
//! ```text
//! let config = BenchConfig::load("bench.toml")?;
//! let results = Benchmark::from_config(config)?.run()?;
//! println!("{}", MarkdownReport::to_string("hetero", &results));
//! ```

mod error;
mod report;
mod result;
mod runner;
mod template;

pub use error::{BenchmarkError, Result};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkResult, BenchmarkRun, SizeResult};
pub use runner::{Benchmark, Compiler, Rustc};
pub use template::{Template, BUILTIN_NAMES};
