//! Price record and table types

use serde::{Deserialize, Serialize};

/// One row of the grocery price table.
///
/// `current_price` and `old_price` are independent observations; the data
/// legitimately contains rows where `old_price < current_price` (a price
/// increase), so no ordering invariant is enforced between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Retailer the price was observed at.
    pub vendor: String,
    /// Price recorded at extraction time, when present.
    pub current_price: Option<f64>,
    /// Previously displayed, struck-out price indicating an advertised sale.
    pub old_price: Option<f64>,
    /// Free-text package size or quantity description.
    pub units: Option<String>,
}

/// The loaded price table. Immutable once constructed; all aggregation
/// produces new derived values.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    records: Vec<PriceRecord>,
}

impl PriceTable {
    /// Build a table from loaded records.
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    /// All records in source order.
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct vendors in order of first appearance in the source table.
    pub fn vendors(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.vendor.as_str()) {
                seen.push(record.vendor.as_str());
            }
        }
        seen
    }
}
