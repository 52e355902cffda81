//! Request and response pairs shared by all resources.
//!
//! A request accumulates query parameters, headers and, for write methods,
//! a body. `send` performs exactly one round trip through the connection's
//! transport. Error statuses are decoded into [`ApiError`] and returned as
//! [`OcmError::Api`].

use std::fmt;
use std::marker::PhantomData;

use ocm_base::{List, ObjectType, codec};
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::connection::Connection;
use crate::error::{ApiError, OcmError, Result, SerializationError};
use crate::http::HttpResponse;
use crate::poll::PollRequest;

/// Header used to act on behalf of another user
pub const IMPERSONATE_USER_HEADER: &str = "Impersonate-User";

/// State shared by every request: where it goes and what it carries
#[derive(Debug, Clone)]
pub(crate) struct RequestBase {
    connection: Connection,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl RequestBase {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self {
            connection,
            path,
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    fn parameter(&mut self, name: String, value: String) {
        self.query.push((name, value));
    }

    fn header(&mut self, name: String, value: String) {
        self.headers.push((name, value));
    }

    async fn round_trip(&self, method: Method, body: Option<Vec<u8>>) -> Result<HttpResponse> {
        let request = self
            .connection
            .prepare(method, &self.path, &self.query, &self.headers, body)?;
        tracing::debug!("{} {}", request.method, request.url);
        if let Some(body) = &request.body {
            tracing::trace!("request body: {}", String::from_utf8_lossy(body));
        }

        let response = self.connection.transport().round_trip(request).await?;
        tracing::debug!("response status: {}", response.status);
        tracing::trace!("response body: {}", String::from_utf8_lossy(&response.body));
        Ok(response)
    }
}

// Options common to every request type.
macro_rules! request_options {
    () => {
        /// Add a query parameter
        pub fn parameter(mut self, name: impl Into<String>, value: impl ::std::fmt::Display) -> Self {
            self.base.parameter(name.into(), value.to_string());
            self
        }

        /// Add a request header
        pub fn header(mut self, name: impl Into<String>, value: impl ::std::fmt::Display) -> Self {
            self.base.header(name.into(), value.to_string());
            self
        }

        /// Act on behalf of another user
        pub fn impersonate(self, user: impl Into<String>) -> Self {
            self.header($crate::request::IMPERSONATE_USER_HEADER, user.into())
        }
    };
}

fn encode_body<T: Serialize>(body: &T) -> Result<Vec<u8>> {
    codec::to_vec(body).map_err(|e| SerializationError::JsonSerialize(e).into())
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    codec::from_slice(body).map(Some).map_err(|source| {
        SerializationError::JsonDeserialize {
            source,
            data: String::from_utf8_lossy(body).into_owned(),
        }
        .into()
    })
}

/// Response to a request that returns at most one object
#[derive(Debug, Clone)]
pub struct Response<T> {
    status: u16,
    header: HeaderMap,
    body: Option<T>,
    error: Option<ApiError>,
}

impl<T> Response<T> {
    fn from_http(response: HttpResponse, decode: bool) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let status = response.status.as_u16();
        if status >= 400 {
            let error = ApiError::from_body(status, &response.body);
            return Ok(Self {
                status,
                header: response.headers,
                body: None,
                error: Some(error),
            });
        }

        let body = if decode {
            decode_body(&response.body)?
        } else {
            None
        };
        Ok(Self {
            status,
            header: response.headers,
            body,
            error: None,
        })
    }

    fn into_result(self) -> Result<Self> {
        match self.error {
            Some(error) => Err(OcmError::Api(error)),
            None => Ok(self),
        }
    }

    /// HTTP status of the response
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers
    pub fn header(&self) -> &HeaderMap {
        &self.header
    }

    /// Decoded body, `None` when the response had no body
    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Consume the response and return its body
    pub fn into_body(self) -> Option<T> {
        self.body
    }

    /// Error payload of a response with an error status
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }
}

/// Response to a GET request
pub type GetResponse<T> = Response<T>;
/// Response to a POST request
pub type AddResponse<T> = Response<T>;
/// Response to a PATCH request
pub type UpdateResponse<T> = Response<T>;
/// Response to a DELETE request
pub type DeleteResponse = Response<()>;

/// Request to retrieve one object
pub struct GetRequest<T> {
    base: RequestBase,
    _marker: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for GetRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetRequest").field("base", &self.base).finish()
    }
}

impl<T> Clone for GetRequest<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> GetRequest<T> {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self {
            base: RequestBase::new(connection, path),
            _marker: PhantomData,
        }
    }

    request_options!();

    /// Send the request. Error statuses are kept on the response.
    pub(crate) async fn exchange(&self) -> Result<GetResponse<T>> {
        let response = self.base.round_trip(Method::GET, None).await?;
        Response::from_http(response, true)
    }

    /// Send the request and wait for the response
    pub async fn send(&self) -> Result<GetResponse<T>> {
        self.exchange().await?.into_result()
    }

    /// Turn this request into a poll request
    pub fn poll(self) -> PollRequest<T> {
        PollRequest::new(self)
    }
}

/// Response to a list request
#[derive(Debug, Clone)]
pub struct ListResponse<T> {
    status: u16,
    header: HeaderMap,
    page: Option<i32>,
    size: Option<i32>,
    total: Option<i32>,
    items: List<T>,
}

#[derive(Deserialize)]
struct ListPage<T> {
    page: Option<i32>,
    size: Option<i32>,
    total: Option<i32>,
    items: Option<Vec<T>>,
}

impl<T> ListResponse<T> {
    /// HTTP status of the response
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers
    pub fn header(&self) -> &HeaderMap {
        &self.header
    }

    /// Index of the returned page, starting at 1
    pub fn page(&self) -> i32 {
        self.page.unwrap_or_default()
    }

    /// Index of the returned page, if the server sent one
    pub fn get_page(&self) -> Option<i32> {
        self.page
    }

    /// Number of items in the returned page
    pub fn size(&self) -> i32 {
        self.size.unwrap_or_default()
    }

    /// Number of items in the returned page, if the server sent one
    pub fn get_size(&self) -> Option<i32> {
        self.size
    }

    /// Total number of items matching the request
    pub fn total(&self) -> i32 {
        self.total.unwrap_or_default()
    }

    /// Total number of items, if the server sent one
    pub fn get_total(&self) -> Option<i32> {
        self.total
    }

    /// Items of the returned page
    pub fn items(&self) -> &List<T> {
        &self.items
    }

    /// Consume the response and return its items
    pub fn into_items(self) -> List<T> {
        self.items
    }
}

/// Request to retrieve a page of a collection
pub struct ListRequest<T> {
    base: RequestBase,
    _marker: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for ListRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRequest").field("base", &self.base).finish()
    }
}

impl<T: DeserializeOwned + ObjectType> ListRequest<T> {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self {
            base: RequestBase::new(connection, path),
            _marker: PhantomData,
        }
    }

    request_options!();

    /// Index of the requested page, starting at 1
    pub fn page(self, page: i32) -> Self {
        self.parameter("page", page)
    }

    /// Maximum number of items per page
    pub fn size(self, size: i32) -> Self {
        self.parameter("size", size)
    }

    /// Search criteria, an SQL-like `where` clause,
    /// e.g. `cluster_id = '123' and status = 'Active'`
    pub fn search(self, search: impl Into<String>) -> Self {
        self.parameter("search", search.into())
    }

    /// Order criteria, an SQL-like `order by` clause, e.g. `created_at desc`
    pub fn order(self, order: impl Into<String>) -> Self {
        self.parameter("order", order.into())
    }

    /// Send the request and wait for the response
    pub async fn send(&self) -> Result<ListResponse<T>> {
        let response = self.base.round_trip(Method::GET, None).await?;
        let status = response.status.as_u16();
        if status >= 400 {
            return Err(ApiError::from_body(status, &response.body).into());
        }

        let page: Option<ListPage<T>> = decode_body(&response.body)?;
        let page = page.unwrap_or(ListPage {
            page: None,
            size: None,
            total: None,
            items: None,
        });
        Ok(ListResponse {
            status,
            header: response.headers,
            page: page.page,
            size: page.size,
            total: page.total,
            items: List::new(page.items.unwrap_or_default()),
        })
    }
}

/// Request to create an object
pub struct AddRequest<T> {
    base: RequestBase,
    body: Option<T>,
}

impl<T: fmt::Debug> fmt::Debug for AddRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddRequest")
            .field("base", &self.base)
            .field("body", &self.body)
            .finish()
    }
}

impl<T: Serialize + DeserializeOwned> AddRequest<T> {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self {
            base: RequestBase::new(connection, path),
            body: None,
        }
    }

    request_options!();

    /// Object to create
    pub fn body(mut self, body: T) -> Self {
        self.body = Some(body);
        self
    }

    /// Send the request and wait for the response
    pub async fn send(&self) -> Result<AddResponse<T>> {
        let body = self.body.as_ref().map(encode_body).transpose()?;
        let response = self.base.round_trip(Method::POST, body).await?;
        Response::from_http(response, true)?.into_result()
    }
}

/// Request to update an object, sending only its present attributes
pub struct UpdateRequest<T> {
    base: RequestBase,
    body: Option<T>,
}

impl<T: fmt::Debug> fmt::Debug for UpdateRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateRequest")
            .field("base", &self.base)
            .field("body", &self.body)
            .finish()
    }
}

impl<T: Serialize + DeserializeOwned> UpdateRequest<T> {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self {
            base: RequestBase::new(connection, path),
            body: None,
        }
    }

    request_options!();

    /// Attributes to change
    pub fn body(mut self, body: T) -> Self {
        self.body = Some(body);
        self
    }

    /// Send the request and wait for the response
    pub async fn send(&self) -> Result<UpdateResponse<T>> {
        let body = self.body.as_ref().map(encode_body).transpose()?;
        let response = self.base.round_trip(Method::PATCH, body).await?;
        Response::from_http(response, true)?.into_result()
    }
}

/// Request to delete an object
#[derive(Debug)]
pub struct DeleteRequest {
    base: RequestBase,
}

impl DeleteRequest {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self {
            base: RequestBase::new(connection, path),
        }
    }

    request_options!();

    /// Send the request and wait for the response
    pub async fn send(&self) -> Result<DeleteResponse> {
        let response = self.base.round_trip(Method::DELETE, None).await?;
        Response::from_http(response, false)?.into_result()
    }
}
