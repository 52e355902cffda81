use crate::connection::Connection;
use crate::poll::PollRequest;
use crate::request::{AddRequest, GetRequest, ListRequest, UpdateRequest};

use super::{LabelsClient, Organization, QuotaCost};

/// Manages the collection of organizations
#[derive(Debug, Clone)]
pub struct OrganizationsClient {
    connection: Connection,
    path: String,
}

impl OrganizationsClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve a page of organizations
    pub fn list(&self) -> ListRequest<Organization> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Create a new organization
    pub fn add(&self) -> AddRequest<Organization> {
        AddRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Reference to the organization with the given identifier
    pub fn organization(&self, id: impl AsRef<str>) -> OrganizationClient {
        OrganizationClient::new(
            self.connection.clone(),
            format!("{}/{}", self.path, id.as_ref()),
        )
    }
}

/// Manages a specific organization
#[derive(Debug, Clone)]
pub struct OrganizationClient {
    connection: Connection,
    path: String,
}

impl OrganizationClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve the details of the organization
    pub fn get(&self) -> GetRequest<Organization> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Update the organization
    pub fn update(&self) -> UpdateRequest<Organization> {
        UpdateRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Wait until the organization satisfies the configured conditions
    pub fn poll(&self) -> PollRequest<Organization> {
        self.get().poll()
    }

    /// Labels attached to the organization
    pub fn labels(&self) -> LabelsClient {
        LabelsClient::new(self.connection.clone(), format!("{}/labels", self.path))
    }

    /// Quota allowed and consumed by the organization
    pub fn quota_cost(&self) -> QuotaCostClient {
        QuotaCostClient::new(self.connection.clone(), format!("{}/quota_cost", self.path))
    }
}

/// Manages the quota cost of an organization
#[derive(Debug, Clone)]
pub struct QuotaCostClient {
    connection: Connection,
    path: String,
}

impl QuotaCostClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve a page of quota costs. Use `parameter("fetchRelatedResources", true)`
    /// and `parameter("fetchCloudAccounts", true)` to include the nested lists.
    pub fn list(&self) -> ListRequest<QuotaCost> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }
}
