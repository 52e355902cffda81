use crate::connection::Connection;
use crate::poll::PollRequest;
use crate::request::{DeleteRequest, GetRequest, ListRequest, UpdateRequest};

use super::{LabelsClient, Subscription};

/// Manages the collection of subscriptions
#[derive(Debug, Clone)]
pub struct SubscriptionsClient {
    connection: Connection,
    path: String,
}

impl SubscriptionsClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve a page of subscriptions
    pub fn list(&self) -> ListRequest<Subscription> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Reference to the subscription with the given identifier
    pub fn subscription(&self, id: impl AsRef<str>) -> SubscriptionClient {
        SubscriptionClient::new(
            self.connection.clone(),
            format!("{}/{}", self.path, id.as_ref()),
        )
    }
}

/// Manages a specific subscription
#[derive(Debug, Clone)]
pub struct SubscriptionClient {
    connection: Connection,
    path: String,
}

impl SubscriptionClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve the details of the subscription
    pub fn get(&self) -> GetRequest<Subscription> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Update the subscription
    pub fn update(&self) -> UpdateRequest<Subscription> {
        UpdateRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Delete the subscription
    pub fn delete(&self) -> DeleteRequest {
        DeleteRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Wait until the subscription satisfies the configured conditions
    pub fn poll(&self) -> PollRequest<Subscription> {
        self.get().poll()
    }

    /// Labels attached to the subscription
    pub fn labels(&self) -> LabelsClient {
        LabelsClient::new(self.connection.clone(), format!("{}/labels", self.path))
    }
}
