//! Runtime validation entry point for loaded configurations.

use crate::schema::ReportConfig;
use pricegraph_common::Result;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &ReportConfig) -> Result<()> {
        config.validate()
    }
}
