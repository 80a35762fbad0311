//! Current-price distribution histogram specification

use crate::AxisRange;
use pricegraph_data::PriceTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bin width in currency units.
pub const HISTOGRAM_BIN_WIDTH: f64 = 1.0;

/// Display clip window for the histogram; half-open, so a price of exactly
/// 50 is excluded from the view.
pub const HISTOGRAM_CLIP: AxisRange = AxisRange {
    min: 0.0,
    max: 50.0,
};

/// One histogram bin covering `[lower, upper)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Exclusive upper edge.
    pub upper: f64,
    /// Number of present values falling in the bin.
    pub count: u32,
}

/// Renderer-agnostic histogram specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Width of each bin.
    pub bin_width: f64,
    /// Clip window the bins cover.
    pub range: AxisRange,
    /// Bins in ascending order, covering the full clip window.
    pub bins: Vec<HistogramBin>,
    /// Present values left out of the view because they fall outside the
    /// clip window. Absent values are not counted here.
    pub excluded: usize,
}

impl HistogramSpec {
    /// Largest bin count, for axis scaling.
    pub fn max_count(&self) -> u32 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Build the current-price histogram specification.
///
/// Clipping affects only this view; out-of-window values still participate
/// in every numeric aggregate elsewhere.
pub fn histogram_spec(table: &PriceTable) -> HistogramSpec {
    let bin_count = ((HISTOGRAM_CLIP.max - HISTOGRAM_CLIP.min) / HISTOGRAM_BIN_WIDTH) as usize;
    let mut counts = vec![0u32; bin_count];
    let mut excluded = 0usize;

    for record in table.records() {
        let Some(price) = record.current_price else {
            continue;
        };

        if HISTOGRAM_CLIP.contains_half_open(price) {
            let bin = ((price - HISTOGRAM_CLIP.min) / HISTOGRAM_BIN_WIDTH) as usize;
            counts[bin.min(bin_count - 1)] += 1;
        } else {
            excluded += 1;
        }
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: HISTOGRAM_CLIP.min + i as f64 * HISTOGRAM_BIN_WIDTH,
            upper: HISTOGRAM_CLIP.min + (i + 1) as f64 * HISTOGRAM_BIN_WIDTH,
            count,
        })
        .collect();

    debug!("Histogram spec built, {} values outside clip window", excluded);

    HistogramSpec {
        title: "Distribution of current prices".to_string(),
        x_label: "Current price (CAD)".to_string(),
        y_label: "Count".to_string(),
        bin_width: HISTOGRAM_BIN_WIDTH,
        range: HISTOGRAM_CLIP,
        bins,
        excluded,
    }
}
