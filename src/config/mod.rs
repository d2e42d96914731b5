//! # Configuration System
//!
//! TOML-based configuration for the benchmark driver, with validation.
//! Every section is optional; an absent file means all defaults.
//!
//! ## Example Configuration
//!
//! ```toml
//! [bench]
//! name = "array-idioms"
//! source_len = 100000
//! strategies = ["chained", "fold", "lazy", "transducer", "fused"]
//!
//! [logging]
//! level = "info"
//! format = "compact"
//!
//! [report]
//! format = "table"
//! observer = "console"
//! ```

mod error;
mod loader;
mod types;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use types::{
    BenchConfig, BenchSection, LogFormat, LogLevel, LoggingConfig, ObserverKind, ReportConfig,
    ReportFormat,
};
pub use validation::{
    BasicValidator, ValidationError, ValidationResult, ValidationSeverity, Validator,
    LARGE_SOURCE_LEN,
};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "IDIOM_BENCH_CONFIG";

/// Configuration file used when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "idiom-bench.toml";

/// Path the driver reads its configuration from.
#[must_use]
pub fn config_path() -> std::path::PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::PathBuf::from(DEFAULT_CONFIG_PATH))
}
