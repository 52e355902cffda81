//! Version 1 of the accounts management API

mod account;
mod accounts_client;
mod billing_model;
mod capability;
mod current_account_client;
mod label;
mod labels_client;
mod organization;
mod organizations_client;
mod quota_cost;
mod subscription;
mod subscriptions_client;

pub use account::{Account, AccountBuilder};
pub use accounts_client::{AccountClient, AccountsClient};
pub use billing_model::BillingModel;
pub use capability::{Capability, CapabilityBuilder};
pub use current_account_client::CurrentAccountClient;
pub use label::{Label, LabelBuilder};
pub use labels_client::{LabelClient, LabelsClient};
pub use organization::{Organization, OrganizationBuilder};
pub use organizations_client::{OrganizationClient, OrganizationsClient, QuotaCostClient};
pub use quota_cost::{
    CloudAccount, CloudAccountBuilder, QuotaCost, QuotaCostBuilder, RelatedResource,
    RelatedResourceBuilder,
};
pub use subscription::{Plan, PlanBuilder, Subscription, SubscriptionBuilder, status as subscription_status};
pub use subscriptions_client::{SubscriptionClient, SubscriptionsClient};

use crate::connection::Connection;

/// Root of the version 1 resource tree
#[derive(Debug, Clone)]
pub struct Client {
    connection: Connection,
    path: String,
}

impl Client {
    pub(crate) fn new(connection: Connection, path: String) -> Self {
        Self { connection, path }
    }

    /// Accounts
    pub fn accounts(&self) -> AccountsClient {
        AccountsClient::new(self.connection.clone(), format!("{}/accounts", self.path))
    }

    /// Account of the authenticated user
    pub fn current_account(&self) -> CurrentAccountClient {
        CurrentAccountClient::new(
            self.connection.clone(),
            format!("{}/current_account", self.path),
        )
    }

    /// Organizations
    pub fn organizations(&self) -> OrganizationsClient {
        OrganizationsClient::new(
            self.connection.clone(),
            format!("{}/organizations", self.path),
        )
    }

    /// Subscriptions
    pub fn subscriptions(&self) -> SubscriptionsClient {
        SubscriptionsClient::new(
            self.connection.clone(),
            format!("{}/subscriptions", self.path),
        )
    }

    /// Labels, across accounts, organizations and subscriptions
    pub fn labels(&self) -> LabelsClient {
        LabelsClient::new(self.connection.clone(), format!("{}/labels", self.path))
    }
}
