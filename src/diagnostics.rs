use thiserror::Error;
use tracing::warn;

/// A recoverable problem with the input. The offending item is skipped and
/// the run carries on.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Diagnostic {
    #[error("{0}")]
    InputUnavailable(String),

    #[error("Price catalogue JSON must be a list of products.")]
    CatalogueNotList,
    #[error("Catalogue item #{0} is not an object.")]
    CatalogueItemNotObject(usize),
    #[error("Catalogue item #{0} has invalid 'title'.")]
    InvalidTitle(usize),
    #[error("Catalogue item #{0} has invalid 'price'.")]
    InvalidPrice(usize),

    #[error("Sales record JSON must be a list of sales.")]
    SalesNotList,
    #[error("Sale #{0} is not an object.")]
    SaleNotObject(usize),
    #[error("Sale #{0}: invalid 'Product'.")]
    InvalidProduct(usize),
    #[error("Sale #{0}: invalid 'Quantity'.")]
    InvalidQuantity(usize),
    #[error("Sale #{index}: product '{product}' not in catalogue.")]
    UnknownProduct { index: usize, product: String },

    #[error("{0}")]
    ResultsNotWritten(String),
}

/// Receives diagnostics as the pipeline walks its input.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Prints each diagnostic to standard output with an `[ERROR]` tag.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    reported: usize,
}

impl ConsoleSink {
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!(%diagnostic, "skipping input");
        println!("[ERROR] {}", diagnostic);
        self.reported += 1;
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
