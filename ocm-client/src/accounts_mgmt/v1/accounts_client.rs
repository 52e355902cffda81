use crate::connection::Connection;
use crate::poll::PollRequest;
use crate::request::{AddRequest, GetRequest, ListRequest, UpdateRequest};

use super::{Account, LabelsClient};

/// Manages the collection of accounts
#[derive(Debug, Clone)]
pub struct AccountsClient {
    connection: Connection,
    path: String,
}

impl AccountsClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve a page of accounts
    pub fn list(&self) -> ListRequest<Account> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Create a new account
    pub fn add(&self) -> AddRequest<Account> {
        AddRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Reference to the account with the given identifier
    pub fn account(&self, id: impl AsRef<str>) -> AccountClient {
        AccountClient::new(
            self.connection.clone(),
            format!("{}/{}", self.path, id.as_ref()),
        )
    }
}

/// Manages a specific account
#[derive(Debug, Clone)]
pub struct AccountClient {
    connection: Connection,
    path: String,
}

impl AccountClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve the details of the account
    pub fn get(&self) -> GetRequest<Account> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Update the account
    pub fn update(&self) -> UpdateRequest<Account> {
        UpdateRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Wait until the account satisfies the configured conditions
    pub fn poll(&self) -> PollRequest<Account> {
        self.get().poll()
    }

    /// Labels attached to the account
    pub fn labels(&self) -> LabelsClient {
        LabelsClient::new(self.connection.clone(), format!("{}/labels", self.path))
    }
}
