use crate::args::Args;
use crate::catalogue::PriceMap;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::engine::compute_sales_total;
use crate::errors::AppError;
use crate::loader::load_json_file;
use crate::report::{SalesReport, RESULTS_FILE};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Everything a single run needs to know.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub catalogue_path: PathBuf,
    pub sales_path: PathBuf,
    pub results_path: PathBuf,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            catalogue_path: PathBuf::from(args.catalogue_file),
            sales_path: PathBuf::from(args.sales_file),
            results_path: PathBuf::from(RESULTS_FILE),
        }
    }
}

/// Computes the report and delivers it to standard output and the results
/// file.
pub fn run<S: DiagnosticSink>(config: &RunConfig, sink: &mut S) -> Result<SalesReport, AppError> {
    let report = compute(config, sink)?;
    publish(&report, &config.results_path, sink);
    Ok(report)
}

/// Loads both documents and totals the sales against the catalogue.
///
/// The elapsed time covers loading, indexing and accumulation, but not
/// formatting or writing the report. If either document cannot be loaded no
/// further work is done.
pub fn compute<S: DiagnosticSink>(config: &RunConfig, sink: &mut S) -> Result<SalesReport, AppError> {
    let started = Instant::now();

    let catalogue = load_or_report(&config.catalogue_path, sink);
    let sales = load_or_report(&config.sales_path, sink);
    let (catalogue, sales) = match (catalogue, sales) {
        (Some(catalogue), Some(sales)) => (catalogue, sales),
        _ => return Err(AppError::InputsUnavailable),
    };

    let prices = PriceMap::build(&catalogue, sink);
    let total_cost = compute_sales_total(&prices, &sales, sink);

    Ok(SalesReport::new(total_cost, started.elapsed().as_secs_f64()))
}

/// Prints the report, then writes it to `results_path`. A failed write is
/// reported and otherwise ignored.
pub fn publish<S: DiagnosticSink>(report: &SalesReport, results_path: &Path, sink: &mut S) {
    println!("{}", report);

    if let Err(err) = report.write_to(results_path) {
        sink.report(Diagnostic::ResultsNotWritten(err.to_string()));
    }
}

fn load_or_report<S: DiagnosticSink>(path: &Path, sink: &mut S) -> Option<Value> {
    match load_json_file(path) {
        Ok(value) => Some(value),
        Err(err) => {
            sink.report(Diagnostic::InputUnavailable(err.to_string()));
            None
        }
    }
}
