//! HTTP request handlers.

use std::time::Instant;

use axum::Json;

use crate::api::extract::ValidatedJson;
use crate::api::types::*;
use crate::engine;

/// Service acknowledgment.
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::default())
}

/// Classify call audio as human or machine.
///
/// POST /predict
#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictionRequest,
    responses(
        (status = 200, description = "Prediction complete", body = PredictionResponse),
        (status = 422, description = "Request body failed validation")
    ),
    tag = "predict"
)]
pub async fn predict(
    ValidatedJson(request): ValidatedJson<PredictionRequest>,
) -> Json<PredictionResponse> {
    let started = Instant::now();

    let prediction = engine::classify(request.audio_url.as_ref());

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::info!(
        audio_url = ?request.audio_url.as_ref().map(|u| u.redacted()),
        has_audio_b64 = request.audio_b64.is_some(),
        label = %prediction.label,
        confidence = prediction.confidence,
        latency_ms,
        "Prediction complete"
    );

    Json(PredictionResponse::new(prediction, latency_ms))
}
