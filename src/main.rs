//! Benchmark driver. Takes no flags; see [`idiom_bench::config`].

use idiom_bench::bench::{BenchmarkRunner, BenchmarkSuite};
use idiom_bench::config::{self, BenchConfig, ConfigLoader, ObserverKind, ReportFormat};
use idiom_bench::observe::{ConsoleObserver, Observer, TracingObserver};
use idiom_bench::report::BenchReport;
use idiom_bench::source::SourceArray;
use idiom_bench::telemetry;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("idiom-bench: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = config::config_path();
    let loader = ConfigLoader::with_defaults();
    let config = loader.load_or_default(&path)?;
    telemetry::init(&config.logging)?;
    telemetry::log_validation_warnings(&loader.warnings(&config));
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %path.display(),
        "starting"
    );

    let observer: Box<dyn Observer> = match config.report.observer {
        ObserverKind::Console => Box::new(ConsoleObserver::new()),
        ObserverKind::Tracing => Box::new(TracingObserver::new()),
    };
    let report = run_suite(&config, observer)?;

    match config.report.format {
        ReportFormat::Table => print!("{}", report.summary()),
        ReportFormat::Json => println!("{}", report.to_json()),
        ReportFormat::None => {}
    }
    info!(failed = report.failed(), "finished");
    Ok(())
}

fn run_suite<O: Observer>(
    config: &BenchConfig,
    observer: O,
) -> Result<BenchReport, Box<dyn std::error::Error>> {
    let suite = BenchmarkSuite::from_strategies(&config.bench.name, &config.bench.strategies)?;
    let mut runner = BenchmarkRunner::new(SourceArray::new(config.bench.source_len), observer);
    suite.run(&mut runner)?;
    Ok(BenchReport::from_results(suite.name(), runner.results()))
}
