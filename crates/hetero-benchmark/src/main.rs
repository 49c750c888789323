//! `hetero-bench`: measures how compile time grows with tuple size.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hetero_benchmark::{Benchmark, CsvExporter, MarkdownReport, Result};
use hetero_config::{BenchConfig, TemplateSpec};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hetero-bench", version, about)]
struct Args {
    /// Configuration file (TOML, or YAML with a .yaml/.yml extension).
    #[arg(short, long, default_value = "bench.toml")]
    config: PathBuf,

    /// Write the CSV report here, overriding the configuration.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the Markdown report here, overriding the configuration.
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// Measure only these templates.
    #[arg(short, long = "template")]
    templates: Vec<String>,

    /// Measure only these sizes.
    #[arg(short, long = "size")]
    sizes: Vec<usize>,
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_config(args: &Args) -> Result<BenchConfig> {
    let mut config = if args.config.exists() {
        BenchConfig::load(&args.config)?
    } else {
        info!(path = %args.config.display(), "Config file not found, using defaults");
        BenchConfig::default()
    };

    if !args.templates.is_empty() {
        config.templates = args
            .templates
            .iter()
            .cloned()
            .map(TemplateSpec::Builtin)
            .collect();
    }
    if !args.sizes.is_empty() {
        config.sizes = args.sizes.clone();
    }
    if let Some(path) = &args.csv {
        config.csv_output = Some(path.clone());
    }
    if let Some(path) = &args.markdown {
        config.markdown_output = Some(path.clone());
    }
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let benchmark = Benchmark::from_config(config)?;
    let results = benchmark.run()?;
    let config = benchmark.config();

    if let Some(path) = &config.csv_output {
        CsvExporter::to_file(&results, path)?;
        info!(path = %path.display(), "CSV report written");
    }
    match &config.markdown_output {
        Some(path) => {
            MarkdownReport::to_file(&config.name, &results, path)?;
            info!(path = %path.display(), "Markdown report written");
        }
        None => MarkdownReport::write(&config.name, &results, std::io::stdout().lock())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Benchmark failed");
            ExitCode::FAILURE
        }
    }
}
