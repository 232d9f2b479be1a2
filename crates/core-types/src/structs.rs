use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One vendor/brand sales-and-purchase summary row of the published dataset.
///
/// Field names mirror the upstream JSON exactly. The collection is read-only
/// after load; the aggregation layer never mutates a record and performs no
/// validation beyond what deserialization enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VendorRecord {
    /// Vendor the purchases were made from. Grouping key.
    pub vendor_name: String,
    /// Brand/product label. Grouping key.
    pub description: String,
    /// Revenue attributed to this row.
    pub total_sales_dollars: Decimal,
    /// Cost basis for this row.
    pub total_purchase_dollars: Decimal,
    /// Unit volume purchased.
    pub total_purchase_quantity: u64,
    /// Revenue minus cost. May be negative.
    pub gross_profit: Decimal,
    /// Gross profit over revenue, as a percentage. May be negative.
    pub profit_margin: Decimal,
}

impl VendorRecord {
    /// Recomputes gross profit from the dollar columns.
    ///
    /// The published dataset already carries `gross_profit`; this exists so
    /// consumers can cross-check a row against its own dollar figures.
    pub fn derived_gross_profit(&self) -> Decimal {
        self.total_sales_dollars - self.total_purchase_dollars
    }

    /// Recomputes the profit margin percentage, or `None` when the row has no
    /// sales to divide by.
    pub fn derived_profit_margin(&self) -> Option<Decimal> {
        if self.total_sales_dollars.is_zero() {
            return None;
        }
        Some(self.derived_gross_profit() / self.total_sales_dollars * Decimal::from(100))
    }
}
