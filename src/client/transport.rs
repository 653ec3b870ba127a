use serde_json::Value;
use url::Url;

use crate::errors::ClientError;

/// Something that can fetch decoded JSON for an API resource path.
///
/// This is the seam between the mapping layer and the network. [`HttpTransport`] is what a
/// [`Client`](super::Client) uses by default; anything else, like recorded responses in tests,
/// can be used through [`Client::with_transport()`](super::Client::with_transport).
///
/// Implementations return the JSON the API answered with even when it describes an error, like
/// `{"code": 404, "status": "We couldn't find that event"}`: turning that into an
/// [`ApiError`](crate::errors::ApiError) is done by the caller.
pub trait Transport {
    /// Fetches `path` (e.g. `events/336`) with the given query `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request could not be made, or its body was not JSON.
    fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ClientError> {
        (**self).fetch(path, params)
    }
}

/// A blocking HTTP [`Transport`] backed by `reqwest`.
///
/// Usually built through a [`ClientBuilder`](super::ClientBuilder).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
    base_url: Url,
    params: Vec<(String, String)>,
}

impl HttpTransport {
    /// Creates a transport that resolves paths against `base_url`, and sends `params` with every request.
    #[must_use]
    pub fn new(
        http: reqwest::blocking::Client,
        base_url: Url,
        params: Vec<(String, String)>,
    ) -> Self {
        Self {
            http,
            base_url,
            params,
        }
    }

    /// The URL resource paths are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ClientError> {
        let url = self.base_url.join(path)?;

        tracing::debug!(%url, ?params, "sending request");

        let response = self
            .http
            .get(url)
            .query(&self.params)
            .query(params)
            .send()?;

        // Error responses still carry a JSON body with `code` and `status`, so the HTTP status
        // alone doesn't decide anything here.
        let status = response.status().as_u16();
        let body = response.text()?;

        tracing::debug!(status, bytes = body.len(), "received response");

        serde_json::from_str(&body).map_err(|source| ClientError::NotJson {
            path: path.to_owned(),
            status,
            source,
        })
    }
}
