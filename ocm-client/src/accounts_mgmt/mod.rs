//! Accounts management service

pub mod v1;

use crate::connection::Connection;

/// Entry point of the accounts management service
#[derive(Debug, Clone)]
pub struct Client {
    connection: Connection,
    path: String,
}

impl Client {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Version 1 of the API
    pub fn v1(&self) -> v1::Client {
        v1::Client::new(self.connection.clone(), format!("{}/v1", self.path))
    }
}
