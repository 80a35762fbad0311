//! Descriptive-statistics aggregation over the price table

use crate::{PriceRecord, PriceTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Sentinel group key used when summarizing without grouping.
pub const OVERALL_GROUP: &str = "all";

/// Numeric field of the price table a summary is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceField {
    /// The price recorded at extraction time.
    CurrentPrice,
    /// The struck-out pre-sale price.
    OldPrice,
}

impl PriceField {
    /// Extract this field's value from a record.
    pub fn value(self, record: &PriceRecord) -> Option<f64> {
        match self {
            Self::CurrentPrice => record.current_price,
            Self::OldPrice => record.old_price,
        }
    }

    /// Column name of this field in the source table.
    pub fn name(self) -> &'static str {
        match self {
            Self::CurrentPrice => "current_price",
            Self::OldPrice => "old_price",
        }
    }
}

/// Value transform applied before aggregation.
///
/// Adding a transform means adding a variant and its `apply` arm; the
/// aggregation path does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transform {
    /// Aggregate raw values.
    Identity,
    /// Aggregate `ln(x + 1)`, keeping zero prices finite and compressing
    /// right skew for cross-vendor comparison.
    LogPlusOne,
}

impl Transform {
    /// Apply the transform to one value.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::LogPlusOne => (x + 1.0).ln(),
        }
    }
}

/// Grouping key for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupBy {
    /// Single group covering the whole table, keyed [`OVERALL_GROUP`].
    None,
    /// One group per vendor, ordered by first appearance.
    Vendor,
}

/// Descriptive statistics for one group and field.
///
/// Every statistic is absent when the group has no present values; the
/// standard deviation is additionally absent when fewer than two values are
/// present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Median (mean of the two middle values for even counts).
    pub median: Option<f64>,
    /// Sample standard deviation (n−1 denominator).
    pub std_dev: Option<f64>,
    /// Smallest present value.
    pub min: Option<f64>,
    /// Largest present value.
    pub max: Option<f64>,
}

impl AggregateSummary {
    /// Compute a summary from the present values of one group.
    ///
    /// An empty slice yields an all-absent summary rather than an error;
    /// failure is per-group, not global.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let std_dev = if values.len() >= 2 {
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            Some(variance.sqrt())
        } else {
            None
        };

        Self {
            mean: Some(mean),
            median: Some(median),
            std_dev,
            min: sorted.first().copied(),
            max: sorted.last().copied(),
        }
    }

    /// Whether every statistic is absent.
    pub fn is_absent(&self) -> bool {
        self.mean.is_none()
    }
}

/// Summarize a numeric field of the table, optionally transformed and grouped.
///
/// Absent values are excluded pairwise: a record missing `field` is skipped
/// for this summary but still contributes its group key, so a vendor with no
/// present values gets an all-absent summary instead of disappearing. Group
/// order in the output is first appearance in the source table.
pub fn summarize(
    table: &PriceTable,
    field: PriceField,
    transform: Transform,
    group_by: GroupBy,
) -> Vec<(String, AggregateSummary)> {
    let mut order: Vec<String> = Vec::new();
    let mut values: HashMap<String, Vec<f64>> = HashMap::new();

    for record in table.records() {
        let key = match group_by {
            GroupBy::None => OVERALL_GROUP,
            GroupBy::Vendor => record.vendor.as_str(),
        };

        if !values.contains_key(key) {
            order.push(key.to_string());
            values.insert(key.to_string(), Vec::new());
        }

        if let Some(value) = field.value(record) {
            if let Some(group) = values.get_mut(key) {
                group.push(transform.apply(value));
            }
        }
    }

    let result: Vec<(String, AggregateSummary)> = order
        .into_iter()
        .map(|key| {
            let summary = AggregateSummary::from_values(&values[&key]);
            (key, summary)
        })
        .collect();

    debug!(
        "Summarized {} over {} group(s)",
        field.name(),
        result.len()
    );
    result
}
