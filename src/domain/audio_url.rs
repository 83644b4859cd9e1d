//! Validated HTTP(S) audio references.
//!
//! Parsing follows the WHATWG URL standard: surrounding whitespace is
//! trimmed, dot segments are resolved, and scheme and host are lowercased.
//! Only absolute `http`/`https` URLs with a host are accepted.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Longest URL accepted, matching common browser limits.
pub const MAX_URL_LEN: usize = 2083;

/// Reasons an audio URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioUrlError {
    #[error("URL exceeds {} characters", MAX_URL_LEN)]
    TooLong,

    #[error("{0}")]
    Invalid(#[from] url::ParseError),

    #[error("URL scheme should be 'http' or 'https', got '{0}'")]
    UnsupportedScheme(String),

    #[error("URL has an empty host")]
    EmptyHost,
}

/// An absolute HTTP or HTTPS URL pointing at call audio.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct AudioUrl(Url);

impl AudioUrl {
    /// Validate and normalize a raw URL string.
    pub fn parse(raw: &str) -> Result<Self, AudioUrlError> {
        if raw.len() > MAX_URL_LEN {
            return Err(AudioUrlError::TooLong);
        }

        let url = Url::parse(raw)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AudioUrlError::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(AudioUrlError::EmptyHost);
        }

        Ok(Self(url))
    }

    /// The normalized URL string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The URL with any username and password removed, for logging.
    pub fn redacted(&self) -> String {
        let mut url = self.0.clone();
        // Cannot fail: http(s) URLs always have a host.
        let _ = url.set_username("");
        let _ = url.set_password(None);
        url.into()
    }
}

impl TryFrom<String> for AudioUrl {
    type Error = AudioUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
