//! Connection to an OCM API server

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::accounts_mgmt;
use crate::error::{HttpError, OcmError, Result};
use crate::http::{HttpRequest, ReqwestTransport, Transport};

/// Default URL of the API server
pub const DEFAULT_URL: &str = "https://api.openshift.com";

/// Configuration of a [`Connection`]
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the API server
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of idle connections kept per host
    pub max_connections: usize,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Headers added to every request
    pub default_headers: Vec<(String, String)>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_connections: 100,
            user_agent: format!("ocm-client/{}", env!("CARGO_PKG_VERSION")),
            default_headers: Vec::new(),
        }
    }
}

/// Builder for creating a configured [`Connection`]
#[derive(Debug, Default)]
pub struct ConnectionBuilder {
    config: ConnectionConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ConnectionBuilder {
    /// Create a new connection builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the API server
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the maximum number of idle connections per host
    pub fn max_connections(mut self, max: usize) -> Self {
        self.config.max_connections = max;
        self
    }

    /// Set the `User-Agent` header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Add a header that is sent with every request
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .default_headers
            .push((name.into(), value.into()));
        self
    }

    /// Use a custom transport instead of the default `reqwest` one
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Use a shared custom transport
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the connection
    pub fn build(self) -> Result<Connection> {
        Connection::new(self.config, self.transport)
    }
}

struct Inner {
    config: ConnectionConfig,
    base: Url,
    default_headers: HeaderMap,
    transport: Arc<dyn Transport>,
}

/// Connection to the API server.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct Connection {
    inner: Arc<Inner>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("url", &self.inner.base.as_str())
            .field("transport", &self.inner.transport)
            .finish()
    }
}

impl Connection {
    /// Create a connection builder
    pub fn builder() -> ConnectionBuilder {
        ConnectionBuilder::new()
    }

    fn new(config: ConnectionConfig, transport: Option<Arc<dyn Transport>>) -> Result<Self> {
        let base = Url::parse(&config.url)
            .map_err(|e| HttpError::InvalidEndpoint(format!("{}: {}", config.url, e)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(HttpError::InvalidEndpoint(format!(
                "{}: scheme must be http or https",
                config.url
            ))
            .into());
        }
        if config.max_connections == 0 {
            return Err(OcmError::Configuration(
                "max_connections must be greater than zero".to_string(),
            ));
        }

        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let (name, value) = header_pair(name, value)?;
            default_headers.append(name, value);
        }

        let transport = match transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };

        tracing::info!("Creating new connection to {}", base);

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                base,
                default_headers,
                transport,
            }),
        })
    }

    /// Get the connection configuration
    pub fn get_config(&self) -> &ConnectionConfig {
        &self.inner.config
    }

    /// Base URL of the API server
    pub fn url(&self) -> &Url {
        &self.inner.base
    }

    /// The transport used for round trips
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.inner.transport
    }

    /// Client for the accounts management service
    pub fn accounts_mgmt(&self) -> accounts_mgmt::Client {
        accounts_mgmt::Client::new(self.clone(), "/api/accounts_mgmt".to_string())
    }

    /// Assemble the wire request for `path` relative to the base URL.
    pub(crate) fn prepare(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        headers: &[(String, String)],
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest> {
        let mut url = self.inner.base.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}{}", prefix, path));
        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut header_map = self.inner.default_headers.clone();
        header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if body.is_some() {
            header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        // Request headers replace defaults of the same name and accumulate otherwise
        let mut request_headers = HeaderMap::new();
        for (name, value) in headers {
            let (name, value) = header_pair(name, value)?;
            request_headers.append(name, value);
        }
        for name in request_headers.keys() {
            header_map.remove(name);
        }
        for (name, value) in &request_headers {
            header_map.append(name.clone(), value.clone());
        }

        Ok(HttpRequest {
            method,
            url,
            headers: header_map,
            body,
        })
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| HttpError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| HttpError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok((header_name, header_value))
}
