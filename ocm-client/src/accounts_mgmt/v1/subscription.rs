use chrono::{DateTime, Utc};
use ocm_base::{List, object_type};

use super::{Account, BillingModel, Capability, Label};

object_type! {
    /// Plan of a subscription.
    resource Plan, PlanBuilder {
        kind: "Plan",
        link_kind: "PlanLink",
        fields: {
            /// Category of the plan
            category, get_category: value String = "category" @ 3,
            /// Name of the plan
            name, get_name: value String = "name" @ 4,
            /// Type of the plan, e.g. `OSD` or `ROSA`
            r#type, get_type: value String = "type" @ 5,
        }
    }
}

object_type! {
    /// Subscription of an organization to a cluster or product.
    resource Subscription, SubscriptionBuilder {
        kind: "Subscription",
        link_kind: "SubscriptionLink",
        fields: {
            /// Date and time the marketplace billing ends
            billing_expiration_date, get_billing_expiration_date: value DateTime<Utc> = "billing_expiration_date" @ 3,
            /// Marketplace account used for billing
            billing_marketplace_account, get_billing_marketplace_account: value String = "billing_marketplace_account" @ 4,
            /// Capabilities granted to the subscription
            capabilities, get_capabilities: nested List<Capability> = "capabilities" @ 5,
            /// Identifier of the cloud account the cluster runs in
            cloud_account_id, get_cloud_account_id: value String = "cloud_account_id" @ 6,
            /// Identifier of the cloud provider, e.g. `aws`
            cloud_provider_id, get_cloud_provider_id: value String = "cloud_provider_id" @ 7,
            /// Billing model of the cluster
            cluster_billing_model, get_cluster_billing_model: value BillingModel = "cluster_billing_model" @ 8,
            /// Identifier of the cluster in the clusters management service
            cluster_id, get_cluster_id: value String = "cluster_id" @ 9,
            /// URL of the cluster console
            console_url, get_console_url: value String = "console_url" @ 10,
            /// Identifier of the consumer in the candlepin service
            consumer_uuid, get_consumer_uuid: value String = "consumer_uuid" @ 11,
            /// Number of CPU cores of the cluster
            cpu_total, get_cpu_total: value i32 = "cpu_total" @ 12,
            /// Date and time the subscription was created
            created_at, get_created_at: value DateTime<Utc> = "created_at" @ 13,
            /// Account that created the subscription
            creator, get_creator: nested Account = "creator" @ 14,
            /// Name shown to users
            display_name, get_display_name: value String = "display_name" @ 15,
            /// Identifier of the cluster as reported by the cluster itself
            external_cluster_id, get_external_cluster_id: value String = "external_cluster_id" @ 16,
            /// Labels attached to the subscription
            labels, get_labels: nested List<Label> = "labels" @ 17,
            /// Date and time the subscription was last reconciled
            last_reconcile_date, get_last_reconcile_date: value DateTime<Utc> = "last_reconcile_date" @ 18,
            /// Date and time the subscription was last released
            last_released_at, get_last_released_at: value DateTime<Utc> = "last_released_at" @ 19,
            /// Date and time of the last telemetry report
            last_telemetry_date, get_last_telemetry_date: value DateTime<Utc> = "last_telemetry_date" @ 20,
            /// True if the cluster is managed by Red Hat
            managed, get_managed: value bool = "managed" @ 21,
            /// Accounts notified about events of the subscription
            notification_contacts, get_notification_contacts: nested List<Account> = "notification_contacts" @ 22,
            /// Identifier of the organization that owns the subscription
            organization_id, get_organization_id: value String = "organization_id" @ 23,
            /// Plan of the subscription
            plan, get_plan: nested Plan = "plan" @ 24,
            /// Product bundle, e.g. `Openshift`
            product_bundle, get_product_bundle: value String = "product_bundle" @ 25,
            /// Service that reported the subscription
            provenance, get_provenance: value String = "provenance" @ 26,
            /// Identifier of the region of the cluster
            region_id, get_region_id: value String = "region_id" @ 27,
            /// True if the subscription has been released
            released, get_released: value bool = "released" @ 28,
            /// Identifier of the Red Hat region that manages the subscription
            rh_region_id, get_rh_region_id: value String = "rh_region_id" @ 29,
            /// Service level, e.g. `L1-L3`
            service_level, get_service_level: value String = "service_level" @ 30,
            /// Number of sockets of the cluster
            socket_total, get_socket_total: value i32 = "socket_total" @ 31,
            /// Status, e.g. `Active`, `Reserved`, `Deprovisioned` or `Archived`
            status, get_status: value String = "status" @ 32,
            /// Support level, e.g. `Premium`, `Standard` or `Eval`
            support_level, get_support_level: value String = "support_level" @ 33,
            /// Unit used to count the cluster, e.g. `Cores/vCPU`
            system_units, get_system_units: value String = "system_units" @ 34,
            /// Date and time the trial ends
            trial_end_date, get_trial_end_date: value DateTime<Utc> = "trial_end_date" @ 35,
            /// Usage, e.g. `Production`
            usage, get_usage: value String = "usage" @ 36,
            /// Date and time the subscription was last updated
            updated_at, get_updated_at: value DateTime<Utc> = "updated_at" @ 37,
        }
    }
}

/// Well known values of the subscription status
pub mod status {
    /// The cluster is running and reporting
    pub const ACTIVE: &str = "Active";
    /// The cluster was deleted
    pub const DEPROVISIONED: &str = "Deprovisioned";
    /// The cluster stopped reporting
    pub const DISCONNECTED: &str = "Disconnected";
    /// Quota is reserved but the cluster does not exist yet
    pub const RESERVED: &str = "Reserved";
    /// The subscription was archived
    pub const ARCHIVED: &str = "Archived";
    /// The subscription is stale
    pub const STALE: &str = "Stale";
}
