use crate::structs::VendorRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which label column a grouped series accumulates under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKey {
    Vendor,
    Brand,
}

impl GroupKey {
    /// Returns the grouping label of a record for this key.
    pub fn of<'a>(&self, record: &'a VendorRecord) -> &'a str {
        match self {
            GroupKey::Vendor => &record.vendor_name,
            GroupKey::Brand => &record.description,
        }
    }
}

/// Which dollar column a grouped series sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DollarField {
    Sales,
    Purchases,
}

impl DollarField {
    /// Returns the dollar value of a record for this field.
    pub fn of(&self, record: &VendorRecord) -> Decimal {
        match self {
            DollarField::Sales => record.total_sales_dollars,
            DollarField::Purchases => record.total_purchase_dollars,
        }
    }
}
