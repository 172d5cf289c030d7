//! Response envelope shared by every API method
//!
//! The backend wraps each response in `{ "success": bool, "data": T, "error": string }`.
//! Callers never see the envelope itself: it is converted into an [`ApiResult`]
//! at the client boundary so the rest of the application can use `?`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a single API call
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors reported by the API collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with `success: false`; the message is passed through verbatim.
    #[error("{0}")]
    Server(String),

    /// The request never produced a usable envelope (network, decoding, missing payload).
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Build a server error from anything displayable
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// The message that should be surfaced to the user
    pub fn message(&self) -> &str {
        match self {
            Self::Server(msg) | Self::Transport(msg) => msg,
        }
    }
}

/// Wire representation of an API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed envelope carrying `error`
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Convert the envelope into a result
    ///
    /// A successful envelope without a payload is treated as a transport error,
    /// since every non-unit endpoint must return data on success.
    pub fn into_result(self) -> ApiResult<T> {
        if !self.success {
            return Err(ApiError::Server(self.error.unwrap_or_default()));
        }
        self.data.ok_or_else(|| {
            log::warn!("API envelope reported success without a payload");
            ApiError::Transport("missing data in successful response".to_string())
        })
    }

    /// Convert the envelope of an endpoint whose payload carries no meaning
    pub fn into_unit(self) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Server(self.error.unwrap_or_default()))
        }
    }
}

impl<T> From<ApiResult<T>> for Envelope<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.message()),
        }
    }
}
