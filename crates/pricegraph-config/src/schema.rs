//! Configuration schema definitions using serde.

use pricegraph_common::ReportError;
use serde::{Deserialize, Serialize};

/// Main configuration structure for PriceGraph report generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Input data configuration.
    pub input: InputConfig,
    /// Output artifact configuration.
    pub output: OutputConfig,
    /// Chart configuration.
    pub charts: ChartsConfig,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Input data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the grocery price CSV file.
    pub path: String,
}

/// Output artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory where charts and tables are written.
    pub dir: String,
}

/// Chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Per-chart enable switches.
    pub enabled: EnabledChartsConfig,
    /// Styling configuration shared by all charts.
    pub styling: StylingConfig,
}

/// Per-chart enable switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledChartsConfig {
    /// Current price distribution histogram.
    pub histogram: bool,
    /// Current vs old mean price grouped bar chart.
    pub grouped_bar: bool,
    /// Old vs current price scatter plot.
    pub scatter: bool,
}

/// Styling configuration shared by all charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
    /// Background color as a hex string.
    pub background: String,
    /// Series color for current prices.
    pub current_color: String,
    /// Series color for old prices.
    pub old_color: String,
    /// Whether to draw grid lines.
    pub enable_grid: bool,
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level filter (e.g., "info", "debug").
    pub level: String,
}

impl ReportConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.input.path.trim().is_empty() {
            return Err(ReportError::config("input path cannot be empty"));
        }

        if self.output.dir.trim().is_empty() {
            return Err(ReportError::config("output directory cannot be empty"));
        }

        if self.charts.styling.width == 0 || self.charts.styling.height == 0 {
            return Err(ReportError::config(
                "chart dimensions must be greater than zero",
            ));
        }

        for (name, color) in [
            ("background", &self.charts.styling.background),
            ("current_color", &self.charts.styling.current_color),
            ("old_color", &self.charts.styling.old_color),
        ] {
            if !is_hex_color(color) {
                return Err(ReportError::config(format!(
                    "{name} must be a hex color like #1f77b4, got '{color}'"
                )));
            }
        }

        Ok(())
    }
}

/// Check whether a string is a "#rrggbb" hex color.
fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
