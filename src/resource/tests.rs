//! Tests for the resource module

use super::*;
use crate::error::Error;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

fn attrs(value: serde_json::Value) -> Attributes {
    Attributes::from_value(value).unwrap()
}

// ============================================================================
// Dotted Access
// ============================================================================

#[test]
fn test_dotted_get_reads_nested_value() {
    let item = attrs(json!({
        "id": 5,
        "type": "subscription",
        "subscription_term": {"identifier": "month", "length": 2}
    }));

    assert_eq!(item.get("subscription_term.length"), Some(&json!(2)));
    assert_eq!(item.get_str("subscription_term.identifier"), Some("month"));
    assert_eq!(item.get("subscription_term.missing"), None);
    assert_eq!(item.get("type.length"), None);
}

#[test]
fn test_literal_dotted_key_wins() {
    let item = attrs(json!({
        "project.name": "literal",
        "project": {"name": "nested"}
    }));

    assert_eq!(item.get_str("project.name"), Some("literal"));
}

#[test]
fn test_dotted_set_creates_intermediate_objects() {
    let mut item = Attributes::default();
    item.set("update_access_expiration_term.length", 3);

    assert_eq!(
        item.to_value(),
        json!({"update_access_expiration_term": {"length": 3}})
    );
}

#[test]
fn test_dotted_set_replaces_scalar_segment() {
    let mut item = attrs(json!({"project": "scalar", "id": 1}));
    item.set("project.name", "Pro");

    assert_eq!(item.to_value(), json!({"project": {"name": "Pro"}, "id": 1}));
}

#[test]
fn test_dotted_set_keeps_sibling_keys() {
    let mut item = attrs(json!({"subscription_term": {"identifier": "year", "length": 1}}));
    item.set("subscription_term.length", 2);

    assert_eq!(
        item.get("subscription_term"),
        Some(&json!({"identifier": "year", "length": 2}))
    );
}

#[test]
fn test_attributes_reject_non_objects() {
    let err = Attributes::from_value(json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(License::from_value(json!("x")).is_err());
}

// ============================================================================
// Coercion
// ============================================================================

#[test]
fn test_scalar_coercions() {
    let item = attrs(json!({
        "id": "12",
        "key_limit": 4.0,
        "transferable": 1,
        "transfer_ready": "true",
        "flag": "no",
        "created_date": "2024-03-01 12:30:00",
        "bad_date": "yesterday"
    }));

    assert_eq!(item.id(), Some(12));
    assert_eq!(item.get_i64("key_limit"), Some(4));
    assert!(item.get_bool("transferable"));
    assert!(item.get_bool("transfer_ready"));
    assert!(!item.get_bool("flag"));
    assert!(!item.get_bool("absent"));
    assert_eq!(
        item.get_datetime("created_date"),
        NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_opt(12, 30, 0))
    );
    assert_eq!(item.get_datetime("bad_date"), None);
}

#[test]
fn test_set_datetime_uses_api_format() {
    let mut item = Attributes::default();
    let date = NaiveDate::from_ymd_opt(2025, 1, 31)
        .and_then(|d| d.and_hms_opt(8, 5, 9))
        .unwrap();

    item.set_datetime("expiration_date", Some(date));
    assert_eq!(item.get_str("expiration_date"), Some("2025-01-31 08:05:09"));

    item.set_datetime("expiration_date", None);
    assert_eq!(item.get("expiration_date"), Some(&json!(null)));
}

// ============================================================================
// Change Tracking
// ============================================================================

#[test]
fn test_changes_track_modified_and_new_keys() {
    let mut item = attrs(json!({"id": 1, "name": "Old", "host": null}));
    assert!(!item.has_changes());

    item.set("name", "New");
    item.set("email", "a@example.com");

    let changes = item.changes();
    assert_eq!(changes.get("name"), Some(&json!("New")));
    assert_eq!(changes.get("email"), Some(&json!("a@example.com")));
    assert!(!changes.contains_key("id"));
}

#[test]
fn test_untouched_null_is_not_a_change() {
    let mut item = attrs(json!({"host": null, "suspension_reason": null}));
    assert!(!item.has_changes());

    item.set("host", "example.com");
    let changes = item.changes();
    assert_eq!(changes.get("host"), Some(&json!("example.com")));
    assert!(!changes.contains_key("suspension_reason"));
}

#[test]
fn test_fetched_license_without_edits_has_no_changes() {
    let license = License::from_value(json!({
        "id": 12,
        "status": "active",
        "suspension_reason": null,
        "host": null
    }))
    .unwrap();

    assert!(!license.has_changes());
    assert!(license.changes().is_empty());
}

#[test]
fn test_fill_merges_top_level() {
    let mut item = attrs(json!({"id": 1, "name": "A"}));
    item.fill(json!({"name": "B", "text": "T"}).as_object().cloned().unwrap());

    assert_eq!(item.to_value(), json!({"id": 1, "name": "B", "text": "T"}));
    assert_eq!(item.changes().len(), 2);
}

#[test]
fn test_link_lookup() {
    let item = attrs(json!({"_links": {"self": "https://api.example.com/licenses/1"}}));

    assert_eq!(item.link("self"), Some("https://api.example.com/licenses/1"));
    assert_eq!(item.link("parent"), None);
    assert_eq!(Attributes::default().link("self"), None);
}

// ============================================================================
// Typed Resources
// ============================================================================

#[test]
fn test_subscription_license() {
    let license = License::from_value(json!({
        "id": 5,
        "type": "subscription",
        "status": "active",
        "subscription_term": {"identifier": "month", "length": 2},
        "key_limit": null,
        "user_id": 7
    }))
    .unwrap();

    assert_eq!(license.id(), Some(5));
    assert!(license.is_subscription());
    assert!(!license.is_perpetual());
    assert!(license.is_active());
    assert!(!license.is_expired());
    assert_eq!(license.key_limit(), None);
    assert_eq!(license.user_id(), Some(7));

    let term = license.subscription_term().unwrap();
    assert_eq!(term.identifier(), Some("month"));
    assert_eq!(term.length(), Some(2));
}

#[test]
fn test_perpetual_license_has_no_subscription_term() {
    let license = License::from_value(json!({
        "type": "perpetual",
        "status": "suspended",
        "subscription_term": {"identifier": "month", "length": 2}
    }))
    .unwrap();

    assert!(license.is_permanent());
    assert!(license.is_suspended());
    assert_eq!(license.subscription_term(), None);
}

#[test]
fn test_license_update_access_term_setter() {
    let mut license = License::default();
    license.set_update_access_expiration_term(&Term::new(Some("year"), Some(3)));

    assert_eq!(
        license.to_value(),
        json!({"update_access_expiration_term": {"identifier": "year", "length": 3}})
    );
    assert_eq!(
        license
            .update_access_expiration_term()
            .and_then(|t| t.length()),
        Some(3)
    );
}

#[test]
fn test_licensing_plan_terms_require_identifier_and_length() {
    let plan = LicensingPlan::from_value(json!({
        "type": "perpetual",
        "project": {"name": "Widget"},
        "license_transfer_lock": true,
        "update_access_expiration_term": {"identifier": "year", "length": 1},
        "transfer_restriction_term": {"identifier": "month", "length": 0}
    }))
    .unwrap();

    assert_eq!(plan.project_name(), Some("Widget"));
    assert!(plan.transfer_lock());
    assert!(plan.update_access_expiration_term().is_some());
    assert_eq!(plan.transfer_restriction_term(), None);
    assert_eq!(plan.subscription_term(), None);
}

#[test]
fn test_license_key_and_user() {
    let key = LicenseKey::from_value(json!({
        "license_id": 3,
        "key": "ABCD-1234",
        "host": "example.com"
    }))
    .unwrap();
    assert_eq!(key.license_id(), Some(3));
    assert_eq!(key.key(), Some("ABCD-1234"));
    assert_eq!(key.host(), Some("example.com"));

    let mut user = User::default();
    user.set_email("a@example.com");
    user.set_password("secret");
    assert_eq!(user.email(), Some("a@example.com"));
    assert_eq!(user.changes().len(), 2);
}

#[test]
fn test_term_estimates() {
    let term = Term::from_value(json!({
        "identifier": "week",
        "length": 1,
        "name": {"singular": "week", "plural": "weeks"},
        "length_estimate": {"minutes": 10080, "hours": 168, "days": 7}
    }))
    .unwrap();

    assert_eq!(term.plural_name(), Some("weeks"));
    assert_eq!(term.estimated_days(), Some(7));
    assert_eq!(term.estimated_hours(), Some(168));
}
