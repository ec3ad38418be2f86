use crate::errors::ReportError;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Where the binary writes its report, relative to the working directory.
pub const RESULTS_FILE: &str = "SalesResults.txt";

/// The outcome of a run: the total cost and how long it took to compute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalesReport {
    pub total_cost: f64,
    pub elapsed_seconds: f64,
}

impl SalesReport {
    pub fn new(total_cost: f64, elapsed_seconds: f64) -> Self {
        Self {
            total_cost,
            elapsed_seconds,
        }
    }

    /// Overwrites `path` with the report followed by a newline. The file is
    /// closed when this returns, whether or not the write succeeded.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let wrap = |source: io::Error| ReportError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(wrap)?;
        writeln!(file, "{}", self).map_err(wrap)?;
        file.flush().map_err(wrap)
    }
}

impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== SALES RESULTS ====")?;
        writeln!(f, "Total Sales Cost: ${}", format_currency(self.total_cost))?;
        writeln!(f)?;
        writeln!(f, "Time Elapsed: {:.6} seconds", self.elapsed_seconds)?;
        write!(f, "=======================")
    }
}

/// Renders `value` with two decimal places and `,` between each group of
/// three integer digits, e.g. `1234567.891` as `1,234,567.89`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    if !value.is_finite() {
        return fixed;
    }

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}
