//! Default values for the configuration schema.

use crate::schema::*;

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            charts: ChartsConfig::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: "data/hammer_prices.csv".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "report".to_string(),
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            enabled: EnabledChartsConfig::default(),
            styling: StylingConfig::default(),
        }
    }
}

impl Default for EnabledChartsConfig {
    fn default() -> Self {
        Self {
            histogram: true,
            grouped_bar: true,
            scatter: true,
        }
    }
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: "#ffffff".to_string(),
            current_color: "#1f77b4".to_string(),
            old_color: "#ff7f0e".to_string(),
            enable_grid: true,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
