//! API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{AudioUrl, Label, Prediction};

/// Name reported by the acknowledgment endpoint.
pub const SERVICE_NAME: &str = "amd";

// ==================== Root ====================

/// Acknowledgment returned by `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Always `true`.
    pub ok: bool,
    /// Service identifier.
    pub service: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            ok: true,
            service: SERVICE_NAME.to_string(),
        }
    }
}

// ==================== Predict ====================

/// Audio to classify.
///
/// Both fields are optional and may be combined.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PredictionRequest {
    /// HTTP(S) location of the call recording.
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Uri)]
    pub audio_url: Option<AudioUrl>,
    /// Base64-encoded audio. Accepted but not decoded.
    #[serde(default)]
    pub audio_b64: Option<String>,
}

/// Classification result.
#[derive(Debug, Serialize, ToSchema)]
pub struct PredictionResponse {
    /// "human" or "machine".
    pub label: Label,
    /// Certainty in the label.
    pub confidence: f64,
    /// Wall-clock processing time in milliseconds.
    pub latency_ms: u64,
    /// Diagnostic details, including the rule that fired.
    #[schema(value_type = Object)]
    pub details: Map<String, Value>,
}

impl PredictionResponse {
    pub fn new(prediction: Prediction, latency_ms: u64) -> Self {
        let mut details = Map::new();
        details.insert("rule".to_string(), Value::from(prediction.rule));

        Self {
            label: prediction.label,
            confidence: prediction.confidence,
            latency_ms,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fields_are_optional() {
        let request: PredictionRequest = serde_json::from_str("{}").unwrap();
        assert!(request.audio_url.is_none());
        assert!(request.audio_b64.is_none());

        let request: PredictionRequest =
            serde_json::from_str(r#"{"audio_url": null, "audio_b64": "UklGRg=="}"#).unwrap();
        assert!(request.audio_url.is_none());
        assert_eq!(request.audio_b64.as_deref(), Some("UklGRg=="));
    }

    #[test]
    fn test_request_rejects_bad_types() {
        assert!(serde_json::from_str::<PredictionRequest>(r#"{"audio_url": "nope"}"#).is_err());
        assert!(serde_json::from_str::<PredictionRequest>(r#"{"audio_url": 42}"#).is_err());
        assert!(serde_json::from_str::<PredictionRequest>(r#"{"audio_b64": true}"#).is_err());
    }

    #[test]
    fn test_response_serialization() {
        let prediction = Prediction::new(Label::Machine, 0.9, "url_contains_machine");
        let json = serde_json::to_value(PredictionResponse::new(prediction, 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "machine",
                "confidence": 0.9,
                "latency_ms": 3,
                "details": {"rule": "url_contains_machine"}
            })
        );
    }

    #[test]
    fn test_root_response() {
        let json = serde_json::to_value(RootResponse::default()).unwrap();
        assert_eq!(json, serde_json::json!({"ok": true, "service": "amd"}));
    }
}
