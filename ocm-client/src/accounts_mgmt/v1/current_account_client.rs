use crate::connection::Connection;
use crate::poll::PollRequest;
use crate::request::GetRequest;

use super::Account;

/// Manages the account of the authenticated user
#[derive(Debug, Clone)]
pub struct CurrentAccountClient {
    connection: Connection,
    path: String,
}

impl CurrentAccountClient {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Retrieve the account of the authenticated user
    pub fn get(&self) -> GetRequest<Account> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Wait until the current account satisfies the configured conditions
    pub fn poll(&self) -> PollRequest<Account> {
        self.get().poll()
    }
}
