//! Rust client for the OCM accounts management API
//!
//! This crate provides typed objects, builders and one client per REST
//! resource of the accounts management service, together with a poll loop
//! that waits for a resource to reach a wanted state.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use ocm_client::{Connection, PollContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let connection = Connection::builder()
//!         .url("https://api.openshift.com")
//!         .default_header("Authorization", "Bearer my-token")
//!         .build()?;
//!
//!     let subscriptions = connection.accounts_mgmt().v1().subscriptions();
//!     let response = subscriptions
//!         .list()
//!         .search("cluster_id = '123'")
//!         .page(1)
//!         .size(1)
//!         .send()
//!         .await?;
//!     println!("found {} subscriptions", response.total());
//!
//!     // Wait for the subscription to become active
//!     let context = PollContext::with_timeout(Duration::from_secs(300));
//!     let response = subscriptions
//!         .subscription("abc")
//!         .poll()
//!         .interval(Duration::from_secs(10))
//!         .predicate(|r| r.body().is_some_and(|s| s.status() == "Active"))
//!         .start(&context)
//!         .await?;
//!     println!("status: {}", response.status());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accounts_mgmt;
pub mod connection;
pub mod error;
pub mod http;
pub mod poll;
pub mod request;

// Re-export main types and traits
pub use connection::{Connection, ConnectionBuilder, ConnectionConfig};
pub use error::{ApiError, HttpError, OcmError, PollError, Result, SerializationError};
pub use http::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use poll::{CancelHandle, PollContext, PollRequest, PollResponse, poll_context};
pub use request::{
    AddRequest, AddResponse, DeleteRequest, DeleteResponse, GetRequest, GetResponse, ListRequest,
    ListResponse, Response, UpdateRequest, UpdateResponse,
};

// Re-export base types for convenience
pub use ocm_base::{BuildError, List, ListBuilder};

// Version information
/// Get the version of this client library
pub fn client_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
