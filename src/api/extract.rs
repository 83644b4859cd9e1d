//! Request extractors.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{AmdError, AmdResult};

/// JSON body extractor that reports every rejection as a validation error.
///
/// Plain [`Json`] answers syntax errors with 400; clients of this API
/// expect 422 for any body it cannot accept. A body sent without a
/// `Content-Type` header is still parsed as JSON. Any other non-JSON
/// content type is rejected.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AmdError;

    async fn from_request(req: Request, state: &S) -> AmdResult<Self> {
        if req.headers().contains_key(CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(Self(value))
    }
}
