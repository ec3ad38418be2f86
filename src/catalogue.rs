use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::shape::{as_object, as_sequence, number_field, text_field};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

pub const TITLE_FIELD: &str = "title";
pub const PRICE_FIELD: &str = "price";

/// A validated element of the price catalogue.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogueEntry {
    pub title: String,
    pub price: f64,
}

impl CatalogueEntry {
    /// Validates the catalogue element found at `index`.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, Diagnostic> {
        let object = as_object(value).ok_or(Diagnostic::CatalogueItemNotObject(index))?;
        let title = text_field(object, TITLE_FIELD).ok_or(Diagnostic::InvalidTitle(index))?;
        let price = number_field(object, PRICE_FIELD).ok_or(Diagnostic::InvalidPrice(index))?;

        Ok(Self {
            title: title.to_string(),
            price,
        })
    }
}

/// A lookup from product title to unit price.
///
/// Built once from the catalogue document and read-only afterwards. When the
/// catalogue lists a title more than once the last occurrence wins.
#[derive(Debug, Default, PartialEq)]
pub struct PriceMap {
    prices: HashMap<String, f64>,
}

impl PriceMap {
    /// Indexes every valid entry of `catalogue`, reporting and skipping the
    /// rest. A catalogue that is not an array yields an empty map.
    pub fn build<S: DiagnosticSink>(catalogue: &Value, sink: &mut S) -> Self {
        let mut map = PriceMap::default();

        let items = match as_sequence(catalogue) {
            Some(items) => items,
            None => {
                sink.report(Diagnostic::CatalogueNotList);
                return map;
            }
        };

        for (index, item) in items.iter().enumerate() {
            match CatalogueEntry::from_value(index, item) {
                Ok(entry) => map.insert(entry),
                Err(diagnostic) => sink.report(diagnostic),
            }
        }

        info!(entries = map.len(), "built price map");
        map
    }

    pub fn get(&self, title: &str) -> Option<f64> {
        self.prices.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    fn insert(&mut self, entry: CatalogueEntry) {
        self.prices.insert(entry.title, entry.price);
    }
}
