use chrono::{DateTime, Utc};
use ocm_base::{List, object_type};

use super::{Capability, Label, Organization};

object_type! {
    /// User account of the accounts management service.
    resource Account, AccountBuilder {
        kind: "Account",
        link_kind: "AccountLink",
        fields: {
            /// Code of the reason the account was banned
            ban_code, get_ban_code: value String = "ban_code" @ 3,
            /// Description of the reason the account was banned
            ban_description, get_ban_description: value String = "ban_description" @ 4,
            /// True if the account is banned
            banned, get_banned: value bool = "banned" @ 5,
            /// Capabilities granted to the account
            capabilities, get_capabilities: nested List<Capability> = "capabilities" @ 6,
            /// Date and time the account was created
            created_at, get_created_at: value DateTime<Utc> = "created_at" @ 7,
            /// Email address of the user
            email, get_email: value String = "email" @ 8,
            /// First name of the user
            first_name, get_first_name: value String = "first_name" @ 9,
            /// Labels attached to the account
            labels, get_labels: nested List<Label> = "labels" @ 10,
            /// Last name of the user
            last_name, get_last_name: value String = "last_name" @ 11,
            /// Organization the account belongs to
            organization, get_organization: nested Organization = "organization" @ 12,
            /// Identifier of the account in the Red Hat IT systems
            rhit_account_id, get_rhit_account_id: value String = "rhit_account_id" @ 13,
            /// Identifier of the web user in the Red Hat IT systems
            rhit_web_user_id, get_rhit_web_user_id: value String = "rhit_web_user_id" @ 14,
            /// True if this is a service account
            service_account, get_service_account: value bool = "service_account" @ 15,
            /// Date and time the account was last updated
            updated_at, get_updated_at: value DateTime<Utc> = "updated_at" @ 16,
            /// Login name of the user
            username, get_username: value String = "username" @ 17,
        }
    }
}
