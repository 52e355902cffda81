use chrono::{DateTime, Utc};
use ocm_base::object_type;

object_type! {
    /// Key/value pair attached to an account, organization or subscription.
    resource Label, LabelBuilder {
        kind: "Label",
        link_kind: "LabelLink",
        fields: {
            /// Identifier of the account the label belongs to
            account_id, get_account_id: value String = "account_id" @ 3,
            /// Date and time the label was created
            created_at, get_created_at: value DateTime<Utc> = "created_at" @ 4,
            /// True if the label is only visible to internal users
            internal, get_internal: value bool = "internal" @ 5,
            /// Key of the label
            key, get_key: value String = "key" @ 6,
            /// Identity of the service that manages the label
            managed_by, get_managed_by: value String = "managed_by" @ 7,
            /// Identifier of the organization the label belongs to
            organization_id, get_organization_id: value String = "organization_id" @ 8,
            /// Identifier of the subscription the label belongs to
            subscription_id, get_subscription_id: value String = "subscription_id" @ 9,
            /// Type of the label, e.g. `Account`, `Organization` or `Subscription`
            r#type, get_type: value String = "type" @ 10,
            /// Date and time the label was last updated
            updated_at, get_updated_at: value DateTime<Utc> = "updated_at" @ 11,
            /// Value of the label
            value, get_value: value String = "value" @ 12,
        }
    }
}
