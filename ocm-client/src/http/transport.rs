//! HTTP transport abstraction
//!
//! Every request goes through a [`Transport`]. The default one is backed by
//! `reqwest`; tests and callers that need authentication or tracing of their
//! own can inject a different implementation.

use std::fmt;
use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

use crate::connection::ConnectionConfig;
use crate::error::{HttpError, Result};

/// A fully prepared HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the encoded query
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Vec<u8>>,
}

/// A raw HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body, empty if there was none
    pub body: Vec<u8>,
}

/// Performs one HTTP round trip.
///
/// Implementations must be shareable between tasks; the connection holds
/// them in an `Arc`.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send the request and wait for the complete response
    fn round_trip(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>>;
}

/// Transport backed by a pooled `reqwest` client
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .zstd(true)
            .pool_max_idle_per_host(config.max_connections)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(HttpError::Request)?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    fn send_error(&self, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::Timeout(self.timeout)
        } else {
            HttpError::Request(error)
        }
    }
}

impl Transport for ReqwestTransport {
    fn round_trip(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method, request.url)
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| self.send_error(e))?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await.map_err(|e| self.send_error(e))?;

            Ok(HttpResponse {
                status,
                headers,
                body: body.to_vec(),
            })
        })
    }
}
