use chrono::{DateTime, Utc};
use ocm_base::{List, object_type};

use super::{Capability, Label};

object_type! {
    /// Organization that owns accounts, subscriptions and quota.
    resource Organization, OrganizationBuilder {
        kind: "Organization",
        link_kind: "OrganizationLink",
        fields: {
            /// Capabilities granted to the organization
            capabilities, get_capabilities: nested List<Capability> = "capabilities" @ 3,
            /// Date and time the organization was created
            created_at, get_created_at: value DateTime<Utc> = "created_at" @ 4,
            /// Identifier of the organization in the EBS billing system
            ebs_account_id, get_ebs_account_id: value String = "ebs_account_id" @ 5,
            /// Identifier of the organization in the Red Hat IT systems
            external_id, get_external_id: value String = "external_id" @ 6,
            /// Labels attached to the organization
            labels, get_labels: nested List<Label> = "labels" @ 7,
            /// Name of the organization
            name, get_name: value String = "name" @ 8,
            /// Date and time the organization was last updated
            updated_at, get_updated_at: value DateTime<Utc> = "updated_at" @ 9,
        }
    }
}
