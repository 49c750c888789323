//! Benchmark result types.

use std::time::Duration;

/// One measured compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkRun {
    /// Run index (0-based) within its size.
    pub run_index: usize,
    /// Wall-clock time spent in the compiler.
    pub compile_time: Duration,
}

impl BenchmarkRun {
    pub fn new(run_index: usize, compile_time: Duration) -> Self {
        Self {
            run_index,
            compile_time,
        }
    }

    /// Compile time in milliseconds, with sub-millisecond precision.
    pub fn compile_time_ms(&self) -> f64 {
        self.compile_time.as_secs_f64() * 1000.0
    }
}

/// All measured compilations of one template at one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeResult {
    /// Number of elements in the generated tuple.
    pub size: usize,
    /// Individual runs.
    pub runs: Vec<BenchmarkRun>,
}

impl SizeResult {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            runs: Vec::new(),
        }
    }

    /// Adds a run to the results.
    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    /// Returns the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the average compile time.
    ///
    /// # Example
    ///
    /// ```
    /// use hetero_benchmark::{BenchmarkRun, SizeResult};
    /// use std::time::Duration;
    ///
    /// let mut result = SizeResult::new(10);
    /// result.add_run(BenchmarkRun::new(0, Duration::from_millis(100)));
    /// result.add_run(BenchmarkRun::new(1, Duration::from_millis(200)));
    ///
    /// assert_eq!(result.avg_compile_time(), Duration::from_millis(150));
    /// ```
    pub fn avg_compile_time(&self) -> Duration {
        if self.runs.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.runs.iter().map(|r| r.compile_time).sum();
        total / self.runs.len() as u32
    }

    /// Returns the minimum compile time.
    pub fn min_compile_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.compile_time)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the maximum compile time.
    pub fn max_compile_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.compile_time)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

/// Results of one template across every measured size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    /// Benchmark suite name.
    pub name: String,
    /// Template name.
    pub template: String,
    /// Results per size, in measurement order.
    pub sizes: Vec<SizeResult>,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            sizes: Vec::new(),
        }
    }

    /// Adds the results of one size.
    pub fn add_size(&mut self, size: SizeResult) {
        self.sizes.push(size);
    }

    /// Returns the total number of measured runs.
    pub fn run_count(&self) -> usize {
        self.sizes.iter().map(SizeResult::run_count).sum()
    }

    /// Returns the results for `size`, if it was measured.
    pub fn size(&self, size: usize) -> Option<&SizeResult> {
        self.sizes.iter().find(|s| s.size == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_result(size: usize, millis: &[u64]) -> SizeResult {
        let mut result = SizeResult::new(size);
        for (i, ms) in millis.iter().enumerate() {
            result.add_run(BenchmarkRun::new(i, Duration::from_millis(*ms)));
        }
        result
    }

    #[test]
    fn test_size_statistics() {
        let result = size_result(5, &[30, 10, 20]);
        assert_eq!(result.run_count(), 3);
        assert_eq!(result.min_compile_time(), Duration::from_millis(10));
        assert_eq!(result.max_compile_time(), Duration::from_millis(30));
        assert_eq!(result.avg_compile_time(), Duration::from_millis(20));
    }

    #[test]
    fn test_empty_size_statistics_are_zero() {
        let result = SizeResult::new(1);
        assert_eq!(result.avg_compile_time(), Duration::ZERO);
        assert_eq!(result.min_compile_time(), Duration::ZERO);
        assert_eq!(result.max_compile_time(), Duration::ZERO);
    }

    #[test]
    fn test_result_lookup_by_size() {
        let mut result = BenchmarkResult::new("suite", "make_tuple");
        result.add_size(size_result(1, &[5]));
        result.add_size(size_result(10, &[7, 9]));

        assert_eq!(result.run_count(), 3);
        assert_eq!(result.size(10).map(SizeResult::run_count), Some(2));
        assert!(result.size(2).is_none());
    }

    #[test]
    fn test_compile_time_ms() {
        let run = BenchmarkRun::new(0, Duration::from_micros(1500));
        assert!((run.compile_time_ms() - 1.5).abs() < 1e-9);
    }
}
