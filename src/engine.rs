use crate::catalogue::PriceMap;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::shape::{as_object, as_sequence, number_field, text_field};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

pub const PRODUCT_FIELD: &str = "Product";
pub const QUANTITY_FIELD: &str = "Quantity";

/// A validated element of the sales record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SaleRecord {
    #[serde(rename = "Product")]
    pub product: String,

    /// Not required to be positive or whole; it is multiplied through as-is.
    #[serde(rename = "Quantity")]
    pub quantity: f64,
}

impl SaleRecord {
    /// Validates the sales element found at `index`.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, Diagnostic> {
        let object = as_object(value).ok_or(Diagnostic::SaleNotObject(index))?;
        let product = text_field(object, PRODUCT_FIELD).ok_or(Diagnostic::InvalidProduct(index))?;
        let quantity =
            number_field(object, QUANTITY_FIELD).ok_or(Diagnostic::InvalidQuantity(index))?;

        Ok(Self {
            product: product.to_string(),
            quantity,
        })
    }

    /// The cost of this sale at catalogue prices.
    pub fn cost(&self, index: usize, prices: &PriceMap) -> Result<f64, Diagnostic> {
        match prices.get(&self.product) {
            Some(price) => Ok(price * self.quantity),
            None => Err(Diagnostic::UnknownProduct {
                index,
                product: self.product.clone(),
            }),
        }
    }
}

/// Sums the cost of every valid, matched sale in `sales`, in input order.
///
/// Elements that fail validation or name a product missing from `prices` are
/// reported to `sink` and contribute nothing. A sales document that is not
/// an array totals 0.0.
pub fn compute_sales_total<S: DiagnosticSink>(prices: &PriceMap, sales: &Value, sink: &mut S) -> f64 {
    let items = match as_sequence(sales) {
        Some(items) => items,
        None => {
            sink.report(Diagnostic::SalesNotList);
            return 0.0;
        }
    };

    let total = items
        .iter()
        .enumerate()
        .fold(0.0, |total, (index, item)| {
            match SaleRecord::from_value(index, item).and_then(|sale| sale.cost(index, prices)) {
                Ok(cost) => total + cost,
                Err(diagnostic) => {
                    sink.report(diagnostic);
                    total
                }
            }
        });

    info!(sales = items.len(), total, "computed sales total");
    total
}
