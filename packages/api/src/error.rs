//! Errors returned by every endpoint wrapper.

use serde::Deserialize;
use thiserror::Error;

/// Error code the backend returns when a booking needs a verified email.
pub const EMAIL_NOT_VERIFIED: &str = "EMAIL_NOT_VERIFIED";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        code: Option<String>,
    },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status code and raw response body.
    ///
    /// The backend error body is `{ "message": "...", "code": "..." }`; anything
    /// else falls back to a generic message naming the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
            code: Option<String>,
        }

        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let code = parsed.as_ref().and_then(|b| b.code.clone());
        let message = parsed
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        ApiError::Http {
            status,
            message,
            code,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Http { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn is_email_not_verified(&self) -> bool {
        self.code() == Some(EMAIL_NOT_VERIFIED)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
