//! Benchmark reporting.
//!
//! Produces a terminal table or JSON from collected results. Reports go to
//! stdout only; nothing is written to disk.

use crate::bench::BenchmarkResult;
use serde::Serialize;

/// One row of a report.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub title: String,
    pub suite: String,
    pub source_len: usize,
    pub elapsed_ns: u64,
    pub elapsed_ms: f64,
    pub ns_per_element: f64,
    pub result_len: usize,
    pub expected_len: usize,
    pub passed: bool,
}

impl Measurement {
    pub fn from_result(suite: &str, result: &BenchmarkResult) -> Self {
        Self {
            title: result.title.clone(),
            suite: suite.to_string(),
            source_len: result.source_len,
            elapsed_ns: result.elapsed.as_nanos() as u64,
            elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
            ns_per_element: result.ns_per_element(),
            result_len: result.actual_len,
            expected_len: result.expected_len,
            passed: result.passed,
        }
    }
}

/// Accumulates measurements and produces reports.
#[derive(Debug, Default, Serialize)]
pub struct BenchReport {
    pub suite_name: String,
    pub timestamp: String,
    pub measurements: Vec<Measurement>,
}

impl BenchReport {
    pub fn new(suite_name: &str) -> Self {
        Self {
            suite_name: suite_name.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            measurements: Vec::new(),
        }
    }

    /// Build a report from runner results, keeping run order.
    pub fn from_results(suite_name: &str, results: &[BenchmarkResult]) -> Self {
        let mut report = Self::new(suite_name);
        for r in results {
            report.add(Measurement::from_result(suite_name, r));
        }
        report
    }

    pub fn add(&mut self, m: Measurement) {
        self.measurements.push(m);
    }

    /// Title of the fastest passing measurement.
    pub fn fastest(&self) -> Option<&str> {
        self.measurements
            .iter()
            .filter(|m| m.passed)
            .min_by_key(|m| m.elapsed_ns)
            .map(|m| m.title.as_str())
    }

    /// Number of measurements that failed the length check.
    pub fn failed(&self) -> usize {
        self.measurements.iter().filter(|m| !m.passed).count()
    }

    /// Produce a summary table as a string.
    pub fn summary(&self) -> String {
        let fastest = self.fastest();
        let mut out = String::new();
        out.push_str(&format!("\n── {} ({}) ──\n", self.suite_name, self.timestamp));
        out.push_str(&format!(
            "  {:<34} {:>12} {:>12} {:>13} {:>6}\n",
            "Benchmark", "Time (ms)", "ns/elem", "Results", "Check"
        ));
        out.push_str(&format!("  {}\n", "─".repeat(81)));
        for m in &self.measurements {
            let marker = if Some(m.title.as_str()) == fastest {
                " *"
            } else {
                ""
            };
            out.push_str(&format!(
                "  {:<34} {:>12.3} {:>12.2} {:>13} {:>6}{}\n",
                m.title,
                m.elapsed_ms,
                m.ns_per_element,
                format!("{}/{}", m.result_len, m.expected_len),
                if m.passed { "PASS" } else { "FAIL" },
                marker
            ));
        }
        out.push_str(&format!(
            "\n  {} benchmarks, {} failed\n",
            self.measurements.len(),
            self.failed()
        ));
        out
    }

    /// Serialize the report to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(title: &str, ms: u64, passed: bool) -> BenchmarkResult {
        BenchmarkResult {
            title: title.to_string(),
            elapsed: Duration::from_millis(ms),
            source_len: 10,
            expected_len: 5,
            actual_len: if passed { 5 } else { 4 },
            counter_after: 10,
            passed,
        }
    }

    #[test]
    fn test_fastest_ignores_failures() {
        let report = BenchReport::from_results(
            "s",
            &[
                result("slow", 9, true),
                result("broken", 1, false),
                result("quick", 3, true),
            ],
        );
        assert_eq!(report.fastest(), Some("quick"));
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_summary_table() {
        let report = BenchReport::from_results(
            "array-idioms",
            &[result("Simple", 2, true), result("x", 1, false)],
        );
        let summary = report.summary();
        assert!(summary.contains("array-idioms"));
        assert!(summary.contains("Simple"));
        assert!(summary.contains("5/5"));
        assert!(summary.contains("FAIL"));
        assert!(summary.contains("2 benchmarks, 1 failed"));
    }

    #[test]
    fn test_columns_align_at_canonical_size() {
        let mut big = result("Transform 2 (semi-imperative)", 40, true);
        big.source_len = 100_000;
        big.expected_len = 50_000;
        big.actual_len = 50_000;
        let mut slow = big.clone();
        slow.title = "Simple".to_string();
        slow.elapsed = Duration::from_millis(80);

        let summary = BenchReport::from_results("canonical", &[big, slow]).summary();
        let header = summary.lines().find(|l| l.contains("Check")).unwrap();
        let check_end = header.find("Check").unwrap() + "Check".len();

        let rows: Vec<_> = summary.lines().filter(|l| l.contains("PASS")).collect();
        assert_eq!(rows.len(), 2);
        for row in rows {
            assert!(row.contains("50000/50000"));
            assert_eq!(row.find("PASS").unwrap() + "PASS".len(), check_end);
        }
    }

    #[test]
    fn test_json_shape() {
        let report = BenchReport::from_results("json", &[result("Fast fix", 1, true)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["suite_name"], "json");
        assert_eq!(value["measurements"][0]["title"], "Fast fix");
        assert_eq!(value["measurements"][0]["elapsed_ns"], 1_000_000);
        assert_eq!(value["measurements"][0]["passed"], true);
    }

    #[test]
    fn test_empty_report() {
        let report = BenchReport::new("empty");
        assert!(report.fastest().is_none());
        assert!(report.summary().contains("0 benchmarks, 0 failed"));
    }
}
