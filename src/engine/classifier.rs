//! URL heuristic classifier.
//!
//! Placeholder for real inference: a call is labelled `machine` when its
//! audio URL mentions "machine". Audio content is never inspected.

use std::panic::{self, UnwindSafe};

use crate::domain::{AudioUrl, Label, Prediction};

/// Name reported in `details.rule` for every prediction.
pub const RULE_NAME: &str = "url_contains_machine";

/// Substring that marks a URL as machine audio.
pub const MACHINE_MARKER: &str = "machine";

pub const MACHINE_CONFIDENCE: f64 = 0.9;
pub const HUMAN_CONFIDENCE: f64 = 0.7;
/// Used when the rule itself fails.
pub const FALLBACK_CONFIDENCE: f64 = 0.6;

/// Classify a call from its (optional) audio URL.
///
/// Never fails: a panic inside the rule degrades to a low-confidence
/// `human` prediction.
pub fn classify(audio_url: Option<&AudioUrl>) -> Prediction {
    guarded(|| url_contains_machine(audio_url))
}

fn url_contains_machine(audio_url: Option<&AudioUrl>) -> Prediction {
    match audio_url {
        Some(url) if url.as_str().contains(MACHINE_MARKER) => {
            Prediction::new(Label::Machine, MACHINE_CONFIDENCE, RULE_NAME)
        }
        _ => Prediction::new(Label::Human, HUMAN_CONFIDENCE, RULE_NAME),
    }
}

fn guarded<F>(rule: F) -> Prediction
where
    F: FnOnce() -> Prediction + UnwindSafe,
{
    panic::catch_unwind(rule).unwrap_or_else(|_| {
        tracing::warn!(rule = RULE_NAME, "Rule evaluation failed, using fallback");
        fallback()
    })
}

fn fallback() -> Prediction {
    Prediction::new(Label::Human, FALLBACK_CONFIDENCE, RULE_NAME)
}
