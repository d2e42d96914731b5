//! Configuration type definitions.

use crate::source::CANONICAL_LEN;
use crate::transform::Strategy;
use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchConfig {
    /// What to run.
    pub bench: BenchSection,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Reporting configuration.
    pub report: ReportConfig,
}

/// Bench section configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchSection {
    /// Suite name shown in reports.
    pub name: String,

    /// Number of elements in the source array.
    pub source_len: usize,

    /// Strategies to run, in order.
    pub strategies: Vec<Strategy>,
}

impl Default for BenchSection {
    fn default() -> Self {
        Self {
            name: "array-idioms".to_string(),
            source_len: CANONICAL_LEN,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: LogLevel,

    /// Log format (pretty, compact, json).
    pub format: LogFormat,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level (most verbose).
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level (default).
    #[default]
    Warn,
    /// Error level (least verbose).
    Error,
}

impl LogLevel {
    /// Equivalent `tracing` level.
    #[must_use]
    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable format (default).
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format (machine-readable).
    Json,
}

/// Reporting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Summary printed after all runs.
    pub format: ReportFormat,

    /// Where per-run timings and diagnostics go.
    pub observer: ObserverKind,
}

/// Summary output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned text table (default).
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// No summary.
    None,
}

/// Per-run timing sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ObserverKind {
    /// `label: 1.234ms` lines on stdout (default).
    #[default]
    Console,
    /// Structured `tracing` events.
    Tracing,
}
