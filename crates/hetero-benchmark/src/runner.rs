//! Benchmark runner.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use hetero_config::BenchConfig;
use tracing::{debug, info};

use crate::error::{BenchmarkError, Result};
use crate::result::{BenchmarkResult, BenchmarkRun, SizeResult};
use crate::template::Template;

/// Compiles one generated source file and reports how long it took.
pub trait Compiler {
    /// Compiles `source` into `output`.
    fn compile(&self, source: &Path, output: &Path) -> Result<Duration>;
}

/// Invokes `rustc` as configured.
#[derive(Debug, Clone)]
pub struct Rustc {
    program: PathBuf,
    args: Vec<String>,
}

impl Rustc {
    /// Builds the invocation shared by every compilation.
    ///
    /// # Example
    ///
    /// ```
    /// use hetero_benchmark::Rustc;
    /// use hetero_config::BenchConfig;
    ///
    /// let config = BenchConfig::new()
    ///     .with_opt_level("2")
    ///     .with_library_path("deps")
    ///     .with_extern("hetero", "libhetero.rlib");
    /// let rustc = Rustc::from_config(&config);
    /// assert_eq!(
    ///     rustc.args(),
    ///     [
    ///         "--edition", "2021", "-C", "opt-level=2", "--crate-type", "bin",
    ///         "-L", "deps", "--extern", "hetero=libhetero.rlib",
    ///     ]
    /// );
    /// ```
    pub fn from_config(config: &BenchConfig) -> Self {
        let mut args = vec![
            "--edition".to_string(),
            config.edition.clone(),
            "-C".to_string(),
            format!("opt-level={}", config.opt_level),
            "--crate-type".to_string(),
            "bin".to_string(),
        ];
        for path in &config.library_paths {
            args.push("-L".to_string());
            args.push(path.display().to_string());
        }
        for (name, path) in &config.externs {
            args.push("--extern".to_string());
            args.push(format!("{}={}", name, path.display()));
        }
        Self {
            program: config.rustc.clone(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Compiler for Rustc {
    fn compile(&self, source: &Path, output: &Path) -> Result<Duration> {
        let start = Instant::now();
        let out = Command::new(&self.program)
            .args(&self.args)
            .arg("-o")
            .arg(output)
            .arg(source)
            .output()
            .map_err(|err| BenchmarkError::Spawn {
                program: self.program.clone(),
                source: err,
            })?;
        let elapsed = start.elapsed();

        if !out.status.success() {
            return Err(BenchmarkError::Compile {
                source_file: source.to_path_buf(),
                status: out.status,
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            });
        }
        Ok(elapsed)
    }
}

/// Measures the compile time of every template at every configured size.
///
/// The compiler is a type parameter so tests can substitute a fake one.
pub struct Benchmark<C: Compiler> {
    config: BenchConfig,
    templates: Vec<Template>,
    compiler: C,
}

impl Benchmark<Rustc> {
    /// Creates a benchmark compiling with `rustc` as configured.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or a template can't
    /// be resolved.
    pub fn from_config(config: BenchConfig) -> Result<Self> {
        let compiler = Rustc::from_config(&config);
        Self::with_compiler(config, compiler)
    }
}

impl<C: Compiler> Benchmark<C> {
    /// Creates a benchmark with an explicit compiler.
    pub fn with_compiler(config: BenchConfig, compiler: C) -> Result<Self> {
        config.validate()?;
        let templates = if config.templates.is_empty() {
            Template::builtins()
        } else {
            config
                .templates
                .iter()
                .map(Template::from_spec)
                .collect::<Result<Vec<_>>>()?
        };
        Ok(Self {
            config,
            templates,
            compiler,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Path of the generated source for `template` at `size`.
    pub fn source_path(&self, template: &Template, size: usize) -> PathBuf {
        self.config
            .work_dir
            .join(format!("bench_{}_{}.rs", template.name(), size))
    }

    /// Runs the benchmark and returns one result per template.
    ///
    /// For every size, the rendered program is compiled `warmup_count`
    /// times unmeasured, then `run_count` times measured.
    pub fn run(&self) -> Result<Vec<BenchmarkResult>> {
        fs::create_dir_all(&self.config.work_dir)?;
        info!(
            name = %self.config.name,
            templates = self.templates.len(),
            sizes = ?self.config.sizes,
            "Benchmark started"
        );

        let mut results = Vec::with_capacity(self.templates.len());
        for template in &self.templates {
            results.push(self.run_template(template)?);
        }

        info!(name = %self.config.name, "Benchmark finished");
        Ok(results)
    }

    fn run_template(&self, template: &Template) -> Result<BenchmarkResult> {
        let mut result = BenchmarkResult::new(&self.config.name, template.name());

        for &size in &self.config.sizes {
            let source = self.source_path(template, size);
            fs::write(&source, template.render(size)?)?;
            let binary = source.with_extension(std::env::consts::EXE_EXTENSION);

            for warmup in 0..self.config.warmup_count {
                debug!(template = template.name(), size, warmup, "Warmup compilation");
                self.compiler.compile(&source, &binary)?;
            }

            let mut size_result = SizeResult::new(size);
            for run_index in 0..self.config.run_count {
                let compile_time = self.compiler.compile(&source, &binary)?;
                debug!(
                    template = template.name(),
                    size,
                    run_index,
                    compile_time_ms = compile_time.as_secs_f64() * 1000.0,
                    "Measured compilation"
                );
                size_result.add_run(BenchmarkRun::new(run_index, compile_time));
            }

            info!(
                template = template.name(),
                size,
                avg_ms = size_result.avg_compile_time().as_secs_f64() * 1000.0,
                "Size measured"
            );
            result.add_size(size_result);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use hetero_config::TemplateSpec;

    use super::*;

    /// Records every call and reports a compile time growing with the
    /// number of calls.
    #[derive(Default)]
    struct FakeCompiler {
        calls: RefCell<Vec<PathBuf>>,
    }

    impl Compiler for FakeCompiler {
        fn compile(&self, source: &Path, _: &Path) -> Result<Duration> {
            let mut calls = self.calls.borrow_mut();
            calls.push(source.to_path_buf());
            Ok(Duration::from_millis(calls.len() as u64))
        }
    }

    fn config(dir: &Path) -> BenchConfig {
        BenchConfig::new()
            .with_name("test")
            .with_runs(2, 3)
            .with_sizes([1, 4])
            .with_template(TemplateSpec::Builtin("make_tuple".into()))
            .with_work_dir(dir)
    }

    #[test]
    fn test_warmups_are_not_measured() {
        let dir = tempfile::tempdir().unwrap();
        let bench = Benchmark::with_compiler(config(dir.path()), FakeCompiler::default()).unwrap();
        let results = bench.run().unwrap();

        assert_eq!(results.len(), 1);
        let sizes = &results[0].sizes;
        assert_eq!(sizes.len(), 2);
        // Calls 1-2 are warmups, 3-5 measured; then 6-7 warmups, 8-10 measured.
        let millis: Vec<u128> = sizes[0].runs.iter().map(|r| r.compile_time.as_millis()).collect();
        assert_eq!(millis, vec![3, 4, 5]);
        assert_eq!(sizes[1].min_compile_time(), Duration::from_millis(8));
        assert_eq!(bench.compiler.calls.borrow().len(), 10);
    }

    #[test]
    fn test_sources_are_written_to_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        let bench = Benchmark::with_compiler(config(dir.path()), FakeCompiler::default()).unwrap();
        bench.run().unwrap();

        let source = dir.path().join("bench_make_tuple_4.rs");
        let text = fs::read_to_string(&source).unwrap();
        assert!(text.contains("make_tuple!(X::<0>, X::<1>, X::<2>, X::<3>)"));
        assert_eq!(bench.compiler.calls.borrow()[0], dir.path().join("bench_make_tuple_1.rs"));
    }

    #[test]
    fn test_empty_template_list_uses_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig::new().with_work_dir(dir.path());
        let bench = Benchmark::with_compiler(config, FakeCompiler::default()).unwrap();
        assert_eq!(bench.templates().len(), crate::template::BUILTIN_NAMES.len());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = BenchConfig::new().with_runs(0, 0);
        assert!(matches!(
            Benchmark::with_compiler(config, FakeCompiler::default()),
            Err(BenchmarkError::Config(_))
        ));

        let config = BenchConfig::new().with_template(TemplateSpec::Builtin("nope".into()));
        assert!(matches!(
            Benchmark::with_compiler(config, FakeCompiler::default()),
            Err(BenchmarkError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_compiler_failure_is_propagated() {
        struct Failing;
        impl Compiler for Failing {
            fn compile(&self, source: &Path, _: &Path) -> Result<Duration> {
                Err(BenchmarkError::UnresolvedPlaceholder {
                    template: source.display().to_string(),
                    placeholder: "{{ x }}".into(),
                })
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let bench = Benchmark::with_compiler(config(dir.path()), Failing).unwrap();
        assert!(bench.run().is_err());
    }
}
