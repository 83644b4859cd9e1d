//! Classifier output.

use crate::domain::Label;

/// A classification before timing information is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Assigned label.
    pub label: Label,
    /// Certainty in the label, in `[0, 1]`.
    pub confidence: f64,
    /// Name of the rule that produced this prediction.
    pub rule: &'static str,
}

impl Prediction {
    pub fn new(label: Label, confidence: f64, rule: &'static str) -> Self {
        debug_assert!((0.0..=1.0).contains(&confidence));
        Self {
            label,
            confidence,
            rule,
        }
    }
}
