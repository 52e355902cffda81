use ocm_base::{List, object_type};

use super::BillingModel;

object_type! {
    /// Cloud account linked to quota.
    object CloudAccount, CloudAccountBuilder {
        kind: "CloudAccount",
        fields: {
            /// Identifier of the account in the cloud provider
            cloud_account_id, get_cloud_account_id: value String = "cloud_account_id" @ 0,
            /// Identifier of the cloud provider, e.g. `aws`
            cloud_provider_id, get_cloud_provider_id: value String = "cloud_provider_id" @ 1,
            /// Marketplace contracts of the account
            contracts, get_contracts: value Vec<String> = "contracts" @ 2,
        }
    }
}

object_type! {
    /// Resource that consumes quota and how much of it.
    object RelatedResource, RelatedResourceBuilder {
        kind: "RelatedResource",
        fields: {
            /// `byoc` for customer cloud subscriptions, `rhinfra` otherwise
            byoc, get_byoc: value String = "byoc" @ 0,
            /// Availability zone type, `single` or `multi`
            availability_zone_type, get_availability_zone_type: value String = "availability_zone_type" @ 1,
            /// Billing model of the resource
            billing_model, get_billing_model: value BillingModel = "billing_model" @ 2,
            /// Cloud provider, e.g. `aws` or `any`
            cloud_provider, get_cloud_provider: value String = "cloud_provider" @ 3,
            /// Units of quota consumed by one resource
            cost, get_cost: value i32 = "cost" @ 4,
            /// Product, e.g. `OSD` or `ROSA`
            product, get_product: value String = "product" @ 5,
            /// Name of the resource, e.g. `m5.xlarge`
            resource_name, get_resource_name: value String = "resource_name" @ 6,
            /// Type of the resource, e.g. `cluster.aws` or `compute.node`
            resource_type, get_resource_type: value String = "resource_type" @ 7,
        }
    }
}

object_type! {
    /// Quota allowed and consumed by an organization.
    object QuotaCost, QuotaCostBuilder {
        kind: "QuotaCost",
        fields: {
            /// Units of quota allowed
            allowed, get_allowed: value i32 = "allowed" @ 0,
            /// Cloud accounts linked to the quota
            cloud_accounts, get_cloud_accounts: nested List<CloudAccount> = "cloud_accounts" @ 1,
            /// Units of quota consumed
            consumed, get_consumed: value i32 = "consumed" @ 2,
            /// Identifier of the organization
            organization_id, get_organization_id: value String = "organization_id" @ 3,
            /// Identifier of the quota
            quota_id, get_quota_id: value String = "quota_id" @ 4,
            /// Resources that consume this quota
            related_resources, get_related_resources: nested List<RelatedResource> = "related_resources" @ 5,
            /// Version of the quota rules
            version, get_version: value String = "version" @ 6,
        }
    }
}

impl QuotaCost {
    /// Units of quota still available, never negative
    pub fn remaining(&self) -> i32 {
        (self.allowed() - self.consumed()).max(0)
    }
}
