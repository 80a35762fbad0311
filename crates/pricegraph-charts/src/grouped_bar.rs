//! Grouped bar chart specification comparing mean current and old prices

use pricegraph_data::{summarize, GroupBy, PriceField, PriceTable, Transform};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One vendor's pair of bars. A missing mean stays `None` and is omitted by
/// the renderer rather than drawn as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGroup {
    /// Vendor the bars belong to.
    pub vendor: String,
    /// Mean current price, when the vendor has any present current prices.
    pub current_mean: Option<f64>,
    /// Mean old price, when the vendor has any present old prices.
    pub old_mean: Option<f64>,
}

/// Renderer-agnostic grouped bar chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarSpec {
    /// Chart title.
    pub title: String,
    /// Y axis label.
    pub y_label: String,
    /// Series names, current first.
    pub series: [String; 2],
    /// Vendor groups in first-appearance order.
    pub groups: Vec<BarGroup>,
}

impl GroupedBarSpec {
    /// Largest present mean across both series, for axis scaling.
    pub fn max_mean(&self) -> Option<f64> {
        self.groups
            .iter()
            .flat_map(|g| [g.current_mean, g.old_mean])
            .flatten()
            .fold(None, |acc: Option<f64>, v| {
                Some(acc.map_or(v, |a| a.max(v)))
            })
    }
}

/// Build the per-vendor mean price comparison specification.
pub fn grouped_bar_spec(table: &PriceTable) -> GroupedBarSpec {
    let current = summarize(
        table,
        PriceField::CurrentPrice,
        Transform::Identity,
        GroupBy::Vendor,
    );
    let old = summarize(
        table,
        PriceField::OldPrice,
        Transform::Identity,
        GroupBy::Vendor,
    );

    // Both summaries walk the same table, so group keys and order agree.
    let groups = current
        .into_iter()
        .zip(old)
        .map(|((vendor, current_summary), (_, old_summary))| BarGroup {
            vendor,
            current_mean: current_summary.mean,
            old_mean: old_summary.mean,
        })
        .collect::<Vec<_>>();

    debug!("Grouped bar spec built for {} vendor(s)", groups.len());

    GroupedBarSpec {
        title: "Mean current vs old price by vendor".to_string(),
        y_label: "Mean price (CAD)".to_string(),
        series: ["Current price".to_string(), "Old price".to_string()],
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricegraph_data::PriceRecord;

    fn record(vendor: &str, current: Option<f64>, old: Option<f64>) -> PriceRecord {
        PriceRecord {
            vendor: vendor.to_string(),
            current_price: current,
            old_price: old,
            units: None,
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let table = PriceTable::new(vec![
            record("Loblaws", Some(5.0), Some(10.0)),
            record("Loblaws", Some(15.0), Some(10.0)),
            record("Metro", Some(8.0), Some(8.0)),
        ]);

        let spec = grouped_bar_spec(&table);
        assert_eq!(spec.groups.len(), 2);

        assert_eq!(spec.groups[0].vendor, "Loblaws");
        assert_eq!(spec.groups[0].current_mean, Some(10.0));
        assert_eq!(spec.groups[0].old_mean, Some(10.0));

        assert_eq!(spec.groups[1].vendor, "Metro");
        assert_eq!(spec.groups[1].current_mean, Some(8.0));
        assert_eq!(spec.groups[1].old_mean, Some(8.0));
    }

    #[test]
    fn test_missing_means_stay_none() {
        let table = PriceTable::new(vec![
            record("Loblaws", Some(4.0), None),
            record("Loblaws", Some(6.0), None),
        ]);

        let spec = grouped_bar_spec(&table);
        assert_eq!(spec.groups[0].current_mean, Some(5.0));
        assert_eq!(spec.groups[0].old_mean, None);
    }

    #[test]
    fn test_vendor_order_is_first_appearance() {
        let table = PriceTable::new(vec![
            record("Metro", Some(1.0), None),
            record("Walmart", Some(2.0), None),
            record("Metro", Some(3.0), None),
        ]);

        let spec = grouped_bar_spec(&table);
        let vendors: Vec<&str> = spec.groups.iter().map(|g| g.vendor.as_str()).collect();
        assert_eq!(vendors, vec!["Metro", "Walmart"]);
    }

    #[test]
    fn test_max_mean() {
        let table = PriceTable::new(vec![
            record("Loblaws", Some(4.0), Some(9.0)),
            record("Metro", Some(2.0), None),
        ]);

        let spec = grouped_bar_spec(&table);
        assert_eq!(spec.max_mean(), Some(9.0));

        let empty = grouped_bar_spec(&PriceTable::default());
        assert_eq!(empty.max_mean(), None);
    }
}
