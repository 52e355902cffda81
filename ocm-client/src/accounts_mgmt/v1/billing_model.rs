//! Billing model of subscriptions and quota.

use std::fmt;

use ocm_base::{Attribute, BuildError, Buildable};
use serde::{Deserialize, Serialize};

/// Billing model of a subscription or quota.
///
/// Values the client does not know are preserved as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillingModel(String);

impl BillingModel {
    /// Standard billing model, billed by Red Hat
    pub const STANDARD: &'static str = "standard";
    /// Billed through a cloud marketplace
    pub const MARKETPLACE: &'static str = "marketplace";
    /// Billed through the AWS marketplace
    pub const MARKETPLACE_AWS: &'static str = "marketplace-aws";
    /// Billed through the GCP marketplace
    pub const MARKETPLACE_GCP: &'static str = "marketplace-gcp";
    /// Billed through the Red Hat marketplace
    pub const MARKETPLACE_RHM: &'static str = "marketplace-rhm";
    /// Billed through the Azure marketplace
    pub const MARKETPLACE_AZURE: &'static str = "marketplace-azure";

    /// Create a billing model from its wire value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wire value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the values known to this client
    pub fn is_known(&self) -> bool {
        matches!(
            self.0.as_str(),
            Self::STANDARD
                | Self::MARKETPLACE
                | Self::MARKETPLACE_AWS
                | Self::MARKETPLACE_GCP
                | Self::MARKETPLACE_RHM
                | Self::MARKETPLACE_AZURE
        )
    }

    /// True for any of the marketplace models
    pub fn is_marketplace(&self) -> bool {
        self.0.starts_with(Self::MARKETPLACE)
    }
}

impl fmt::Display for BillingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BillingModel {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BillingModel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for BillingModel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BillingModel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Attribute for BillingModel {
    type Ref<'a> = &'a BillingModel;

    fn as_attribute(&self) -> Self::Ref<'_> {
        self
    }
}

impl Buildable for BillingModel {
    type Builder = BillingModel;

    fn build_from(builder: &Self::Builder) -> Result<Self, BuildError> {
        Ok(builder.clone())
    }

    fn to_builder(&self) -> Self::Builder {
        self.clone()
    }
}
