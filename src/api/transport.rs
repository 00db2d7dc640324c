//! HTTP transport seam
//!
//! The client only needs "POST url + headers + body" and "GET url", each
//! answering with a status code and body text. [`HttpTransport`] provides
//! that on top of a blocking [`reqwest`] client; tests substitute their own
//! implementation.

use std::time::Duration;
use thiserror::Error;

/// Status code and body text of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A request that failed before an HTTP response was received
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Blocking request/response transport
pub trait Transport {
    fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError>;

    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest::blocking`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Transport with reqwest's default timeout
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(None)
    }

    /// Transport with an explicit per-request timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    fn into_response(
        response: reqwest::blocking::Response,
    ) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        // The URL carries the API token, keep it out of error messages
        let body = response.text().map_err(|e| e.without_url())?;
        Ok(HttpResponse { status, body })
    }
}

impl Transport for HttpTransport {
    fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send().map_err(|e| e.without_url())?;
        Self::into_response(response)
    }

    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| e.without_url())?;
        Self::into_response(response)
    }
}
