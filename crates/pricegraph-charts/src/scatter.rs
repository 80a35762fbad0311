//! Old vs current price scatter specification with identity reference line

use crate::AxisRange;
use pricegraph_data::PriceTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Clip window applied to both scatter axes, bounds inclusive.
pub const SCATTER_CLIP: AxisRange = AxisRange {
    min: 0.0,
    max: 100.0,
};

/// Position of a point relative to the identity line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceChange {
    /// Current price strictly below the old price.
    Drop,
    /// Current price strictly above the old price.
    Increase,
    /// Current price equal to the old price.
    Unchanged,
}

/// Classify a price pair against the identity line.
pub fn classify(old_price: f64, current_price: f64) -> PriceChange {
    if current_price < old_price {
        PriceChange::Drop
    } else if current_price > old_price {
        PriceChange::Increase
    } else {
        PriceChange::Unchanged
    }
}

/// One scatter point: `(old_price, current_price)` with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// X coordinate: the struck-out old price.
    pub old_price: f64,
    /// Y coordinate: the current price.
    pub current_price: f64,
    /// Which side of the identity line the point falls on.
    pub change: PriceChange,
}

/// Renderer-agnostic scatter specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSpec {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Clip window applied to both axes.
    pub range: AxisRange,
    /// Points inside the clip window.
    pub points: Vec<ScatterPoint>,
    /// Whether the renderer should draw the slope-1 reference line.
    pub identity_line: bool,
    /// Rows left out of this view: either coordinate absent or outside the
    /// clip window.
    pub excluded: usize,
}

/// Build the old-vs-current price scatter specification.
///
/// Exclusion is local to this view; excluded rows still feed every numeric
/// aggregate.
pub fn scatter_spec(table: &PriceTable) -> ScatterSpec {
    let mut points = Vec::new();
    let mut excluded = 0usize;

    for record in table.records() {
        match (record.old_price, record.current_price) {
            (Some(old_price), Some(current_price))
                if SCATTER_CLIP.contains_closed(old_price)
                    && SCATTER_CLIP.contains_closed(current_price) =>
            {
                points.push(ScatterPoint {
                    old_price,
                    current_price,
                    change: classify(old_price, current_price),
                });
            }
            _ => excluded += 1,
        }
    }

    debug!(
        "Scatter spec built with {} point(s), {} row(s) excluded",
        points.len(),
        excluded
    );

    ScatterSpec {
        title: "Current vs old price".to_string(),
        x_label: "Old price (CAD)".to_string(),
        y_label: "Current price (CAD)".to_string(),
        range: SCATTER_CLIP,
        points,
        identity_line: true,
        excluded,
    }
}
