//! Shared chart specification types

use serde::{Deserialize, Serialize};

/// A closed or half-open numeric axis range used for clipping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Upper bound; inclusivity depends on the view's boundary policy.
    pub max: f64,
}

impl AxisRange {
    /// Create a range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether a value falls inside `[min, max)`.
    pub fn contains_half_open(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    /// Whether a value falls inside `[min, max]`.
    pub fn contains_closed(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_open_boundary() {
        let range = AxisRange::new(0.0, 50.0);
        assert!(range.contains_half_open(0.0));
        assert!(range.contains_half_open(49.99));
        assert!(!range.contains_half_open(50.0));
        assert!(!range.contains_half_open(-0.01));
    }

    #[test]
    fn test_closed_boundary() {
        let range = AxisRange::new(0.0, 100.0);
        assert!(range.contains_closed(100.0));
        assert!(!range.contains_closed(100.01));
    }
}
