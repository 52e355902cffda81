//! Tests of the accounts management types: presence tracking, builders and
//! their JSON representation.

use chrono::{TimeZone, Utc};
use ocm_base::codec;
use ocm_client::accounts_mgmt::v1::{
    Account, BillingModel, Capability, CloudAccount, Label, Organization, Plan, QuotaCost,
    RelatedResource, Subscription, subscription_status,
};
use ocm_client::{BuildError, List, ListBuilder};

#[test]
fn test_absent_fields_read_as_zero() {
    let account = Account::builder().build().unwrap();
    assert!(account.is_empty());
    assert_eq!(account.get_email(), None);
    assert_eq!(account.email(), "");
    assert_eq!(account.get_banned(), None);
    assert!(!account.banned());
    assert!(account.get_organization().is_none());
    assert!(account.organization().is_empty());
    assert!(account.labels().is_empty());
}

#[test]
fn test_any_setter_makes_object_non_empty() {
    assert!(!Account::builder().banned(false).build().unwrap().is_empty());
    assert!(!Account::builder().id("a").build().unwrap().is_empty());
    assert!(!Subscription::builder().usage("Production").build().unwrap().is_empty());
    assert!(Account::builder().link(true).href("/x").build().unwrap().link());
}

#[test]
fn test_fields_beyond_thirty_two_bits() {
    let expiry = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();
    let subscription = Subscription::builder()
        .status(subscription_status::ACTIVE)
        .support_level("Premium")
        .trial_end_date(expiry)
        .usage("Production")
        .updated_at(expiry)
        .build()
        .unwrap();

    assert_eq!(subscription.get_status(), Some("Active"));
    assert_eq!(subscription.get_support_level(), Some("Premium"));
    assert_eq!(subscription.get_trial_end_date(), Some(expiry));
    assert_eq!(subscription.get_usage(), Some("Production"));
    assert_eq!(subscription.get_updated_at(), Some(expiry));
    assert_eq!(subscription.get_system_units(), None);
    assert_eq!(subscription.get_billing_expiration_date(), None);
}

#[test]
fn test_failing_nested_builder_fails_parent() {
    let err = Subscription::builder()
        .display_name("cluster")
        .creator(Account::builder().link(true))
        .build()
        .unwrap_err();
    assert_eq!(err, BuildError::LinkWithoutTarget { kind: "Account" });

    let err = Account::builder()
        .labels(ListBuilder::<Label>::new().push(Label::builder().link(true)))
        .build()
        .unwrap_err();
    assert!(matches!(err, BuildError::ListItem { kind: "LabelList", index: 0, .. }));
}

#[test]
fn test_copy_then_patch() {
    let original = Organization::builder()
        .id("org-1")
        .name("Acme")
        .capabilities(
            ListBuilder::<Capability>::new()
                .push(Capability::builder().name("capability.org.x").value("true")),
        )
        .build()
        .unwrap();

    let patched = Organization::builder()
        .copy(&original)
        .name("Acme Corp")
        .build()
        .unwrap();

    assert_eq!(patched.id(), "org-1");
    assert_eq!(patched.name(), "Acme Corp");
    assert_eq!(patched.capabilities(), original.capabilities());
    assert_eq!(original.name(), "Acme");
}

#[test]
fn test_account_round_trip() {
    let created = Utc.with_ymd_and_hms(2023, 7, 14, 8, 15, 30).unwrap();
    let account = Account::builder()
        .id("acc-1")
        .href("/api/accounts_mgmt/v1/accounts/acc-1")
        .username("jdoe")
        .email("jdoe@example.com")
        .banned(false)
        .created_at(created)
        .organization(Organization::builder().link(true).id("org-1"))
        .labels(ListBuilder::<Label>::new().push(Label::builder().key("k").value("v").internal(true)))
        .build()
        .unwrap();

    let json = codec::to_string(&account).unwrap();
    let decoded: Account = codec::from_str(&json).unwrap();
    assert_eq!(decoded, account);
    assert!(decoded.organization().link());
}

#[test]
fn test_subscription_round_trip() {
    let subscription = Subscription::builder()
        .id("sub-1")
        .cluster_id("c-1")
        .cluster_billing_model(BillingModel::MARKETPLACE_AWS)
        .cpu_total(16)
        .managed(true)
        .plan(Plan::builder().id("MOA").r#type("ROSA"))
        .notification_contacts(
            ListBuilder::<Account>::new()
                .push(Account::builder().id("a").email("a@example.com"))
                .push(Account::builder().id("b")),
        )
        .build()
        .unwrap();

    let bytes = codec::to_vec(&subscription).unwrap();
    let decoded: Subscription = codec::from_slice(&bytes).unwrap();
    assert_eq!(decoded, subscription);
    assert_eq!(decoded.plan().r#type(), "ROSA");
    assert_eq!(decoded.notification_contacts().len(), 2);
}

#[test]
fn test_serialized_field_order_and_presence() {
    let label = Label::builder()
        .id("l-1")
        .key("team")
        .value("blue")
        .build()
        .unwrap();
    assert_eq!(
        codec::to_string(&label).unwrap(),
        r#"{"kind":"Label","id":"l-1","key":"team","value":"blue"}"#
    );

    let link = Account::builder().link(true).id("a-1").build().unwrap();
    assert_eq!(
        codec::to_string(&link).unwrap(),
        r#"{"kind":"AccountLink","id":"a-1"}"#
    );
}

#[test]
fn test_empty_collections_are_not_written() {
    let cloud_account = CloudAccount::builder()
        .cloud_account_id("123456789012")
        .contracts(Vec::<String>::new())
        .build()
        .unwrap();
    assert_eq!(
        codec::to_string(&cloud_account).unwrap(),
        r#"{"cloud_account_id":"123456789012"}"#
    );
}

#[test]
fn test_unknown_fields_and_nulls_are_skipped() {
    let json = r#"{
        "kind": "QuotaCost",
        "quota_id": "add-on|addon-open-data-hub",
        "allowed": 5,
        "consumed": null,
        "brand_new_field": [1, {"a": null}],
        "related_resources": [
            {"resource_name": "m5.xlarge", "cost": 2, "unexpected": "x"}
        ]
    }"#;
    let quota: QuotaCost = codec::from_str(json).unwrap();
    assert_eq!(quota.get_allowed(), Some(5));
    assert_eq!(quota.get_consumed(), None);
    assert_eq!(quota.remaining(), 5);
    let resource: &RelatedResource = quota.related_resources().get(0).unwrap();
    assert_eq!(resource.resource_name(), "m5.xlarge");
    assert_eq!(resource.cost(), 2);
}

#[test]
fn test_malformed_timestamp_fails() {
    let json = r#"{"kind":"Account","id":"a","created_at":"last tuesday"}"#;
    assert!(codec::from_str::<Account>(json).is_err());
}

#[test]
fn test_list_link_decodes() {
    let json = r#"{
        "kind": "Subscription",
        "id": "sub-1",
        "labels": {"kind": "LabelListLink", "href": "/api/accounts_mgmt/v1/subscriptions/sub-1/labels"}
    }"#;
    let subscription: Subscription = codec::from_str(json).unwrap();
    let labels: &List<Label> = subscription.labels();
    assert!(labels.link());
    assert_eq!(labels.kind(), "LabelListLink");
    assert!(labels.is_empty());
    assert_eq!(
        labels.get_href(),
        Some("/api/accounts_mgmt/v1/subscriptions/sub-1/labels")
    );
}

#[test]
fn test_unknown_billing_model_is_kept() {
    let json = r#"{"kind":"Subscription","cluster_billing_model":"marketplace-moon"}"#;
    let subscription: Subscription = codec::from_str(json).unwrap();
    assert!(!subscription.cluster_billing_model().is_known());
    assert_eq!(subscription.cluster_billing_model().as_str(), "marketplace-moon");
}
