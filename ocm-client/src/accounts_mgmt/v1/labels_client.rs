use crate::connection::Connection;
use crate::poll::PollRequest;
use crate::request::{AddRequest, DeleteRequest, GetRequest, ListRequest, UpdateRequest};

use super::Label;

/// Manages the labels of a resource
#[derive(Debug, Clone)]
pub struct LabelsClient {
    connection: Connection,
    path: String,
}

impl LabelsClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve a page of labels
    pub fn list(&self) -> ListRequest<Label> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Create a new label
    pub fn add(&self) -> AddRequest<Label> {
        AddRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Reference to the label with the given key
    pub fn label(&self, key: impl AsRef<str>) -> LabelClient {
        LabelClient::new(
            self.connection.clone(),
            format!("{}/{}", self.path, key.as_ref()),
        )
    }
}

/// Manages a specific label
#[derive(Debug, Clone)]
pub struct LabelClient {
    connection: Connection,
    path: String,
}

impl LabelClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve the label
    pub fn get(&self) -> GetRequest<Label> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Update the label
    pub fn update(&self) -> UpdateRequest<Label> {
        UpdateRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Delete the label
    pub fn delete(&self) -> DeleteRequest {
        DeleteRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Wait until the label satisfies the configured conditions
    pub fn poll(&self) -> PollRequest<Label> {
        self.get().poll()
    }
}
