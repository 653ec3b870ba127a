//! Errors that can happen when fetching and mapping Marvel API data.

use thiserror::Error;

pub use crate::stdx::error::InternalInvariant;

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ClientError(#[from] ClientError),
    #[error(transparent)]
    ApiError(#[from] ApiError),
}

/// A failure of the transport: building the HTTP client, sending the request, or decoding its body.
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("response for `{path}` was not JSON (HTTP {status})")]
    NotJson {
        path: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unexpected(anyhow::Error::from(error))
    }
}

/// The API refused the request, or what it sent back could not be turned into an entity.
///
/// Whether the API answered with a non-200 `code`, or a single result failed
/// validation, the request as a whole is considered failed: no partial entity
/// or partial list is ever returned.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload carried a `code` other than `200`.
    #[error("{}", .status.as_deref().unwrap_or("API returned an error without a status"))]
    Status {
        /// The API's `code`, which is a number for most errors but a string for gateway errors like `InvalidCredentials`.
        code: String,
        /// The API's `status` (or `message`) text.
        status: Option<String>,
    },
    /// A field was missing or failed coercion.
    #[error("failed to validate `{kind}`: {source}")]
    Validation {
        /// The entity kind being built.
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// The payload structure was off before coercion could even start.
    #[error(transparent)]
    Invariant(#[from] InternalInvariant),
}

impl ApiError {
    /// The API's status text, when this error came from a non-200 `code`.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::Status { status, .. } => status.as_deref(),
            Self::Validation { .. } | Self::Invariant(_) => None,
        }
    }
}
