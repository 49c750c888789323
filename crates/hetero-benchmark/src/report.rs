//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::BenchmarkResult;

/// CSV exporter for benchmark results.
///
/// One row per measured compilation, with columns for template, size, run
/// index and compile time.
///
/// # Example
///
/// ```
/// use hetero_benchmark::{BenchmarkResult, BenchmarkRun, CsvExporter, SizeResult};
/// use std::time::Duration;
///
/// let mut size = SizeResult::new(10);
/// size.add_run(BenchmarkRun::new(0, Duration::from_millis(120)));
/// let mut result = BenchmarkResult::new("suite", "make_tuple");
/// result.add_size(size);
///
/// let csv = CsvExporter::to_string(&[result]);
/// assert!(csv.starts_with("template,size,run_index,compile_time_ms\n"));
/// assert!(csv.contains("make_tuple,10,0,120.000"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark results to a CSV string.
    pub fn to_string(results: &[BenchmarkResult]) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(results, &mut output);
        output
    }

    fn render(results: &[BenchmarkResult], output: &mut String) -> fmt::Result {
        writeln!(output, "template,size,run_index,compile_time_ms")?;
        for result in results {
            for size in &result.sizes {
                for run in &size.runs {
                    writeln!(
                        output,
                        "{},{},{},{:.3}",
                        result.template,
                        size.size,
                        run.run_index,
                        run.compile_time_ms(),
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Exports benchmark results to a CSV file.
    pub fn to_file(results: &[BenchmarkResult], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes benchmark results as CSV to a writer.
    pub fn write<W: Write>(results: &[BenchmarkResult], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}

/// Markdown report generator.
///
/// Generates a summary table per template with the minimum, average and
/// maximum compile time of every size.
///
/// # Example
///
/// ```
/// use hetero_benchmark::{BenchmarkResult, MarkdownReport};
///
/// let result = BenchmarkResult::new("Tuples", "take_while");
/// let md = MarkdownReport::to_string("Tuples", &[result]);
/// assert!(md.contains("# Benchmark: Tuples"));
/// assert!(md.contains("## take_while"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(name: &str, results: &[BenchmarkResult]) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(name, results, &mut output);
        output
    }

    fn render(name: &str, results: &[BenchmarkResult], output: &mut String) -> fmt::Result {
        writeln!(output, "# Benchmark: {name}")?;
        writeln!(output)?;
        writeln!(output, "- **Templates**: {}", results.len())?;
        writeln!(
            output,
            "- **Runs**: {}",
            results.iter().map(BenchmarkResult::run_count).sum::<usize>()
        )?;

        for result in results {
            writeln!(output)?;
            writeln!(output, "## {}", result.template)?;
            writeln!(output)?;

            if result.sizes.is_empty() {
                writeln!(output, "*No sizes measured.*")?;
                continue;
            }

            writeln!(output, "| Size | Runs | Min (ms) | Avg (ms) | Max (ms) |")?;
            writeln!(output, "|------|------|----------|----------|----------|")?;
            for size in &result.sizes {
                writeln!(
                    output,
                    "| {} | {} | {:.2} | {:.2} | {:.2} |",
                    size.size,
                    size.run_count(),
                    size.min_compile_time().as_secs_f64() * 1000.0,
                    size.avg_compile_time().as_secs_f64() * 1000.0,
                    size.max_compile_time().as_secs_f64() * 1000.0,
                )?;
            }
        }
        Ok(())
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(
        name: &str,
        results: &[BenchmarkResult],
        path: impl AsRef<Path>,
    ) -> io::Result<()> {
        fs::write(path, Self::to_string(name, results))
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(name: &str, results: &[BenchmarkResult], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(name, results).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::result::{BenchmarkRun, SizeResult};

    fn sample() -> Vec<BenchmarkResult> {
        let mut small = SizeResult::new(1);
        small.add_run(BenchmarkRun::new(0, Duration::from_millis(10)));
        small.add_run(BenchmarkRun::new(1, Duration::from_millis(30)));
        let mut large = SizeResult::new(50);
        large.add_run(BenchmarkRun::new(0, Duration::from_millis(250)));

        let mut tuples = BenchmarkResult::new("suite", "make_tuple");
        tuples.add_size(small);
        tuples.add_size(large);
        vec![tuples, BenchmarkResult::new("suite", "set_make")]
    }

    #[test]
    fn test_csv_has_one_row_per_run() {
        let csv = CsvExporter::to_string(&sample());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "template,size,run_index,compile_time_ms",
                "make_tuple,1,0,10.000",
                "make_tuple,1,1,30.000",
                "make_tuple,50,0,250.000",
            ]
        );
    }

    #[test]
    fn test_markdown_summarizes_each_size() {
        let md = MarkdownReport::to_string("suite", &sample());
        assert!(md.contains("- **Templates**: 2"));
        assert!(md.contains("- **Runs**: 3"));
        assert!(md.contains("| 1 | 2 | 10.00 | 20.00 | 30.00 |"));
        assert!(md.contains("| 50 | 1 | 250.00 | 250.00 | 250.00 |"));
        assert!(md.contains("## set_make\n\n*No sizes measured.*"));
    }

    #[test]
    fn test_reports_write_to_files_and_writers() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");
        CsvExporter::to_file(&sample(), &csv_path).unwrap();
        assert!(fs::read_to_string(&csv_path).unwrap().contains("make_tuple,50,0"));

        let mut buffer = Vec::new();
        MarkdownReport::write("suite", &sample(), &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("# Benchmark: suite"));
    }
}
