//! Tests for the endpoint services

use crate::error::Error;
use crate::resource::{License, LicenseKey, LicensingPlan, Project, Resource, User};
use crate::types::JsonObject;
use crate::LicenseJetClient;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LicenseJetClient {
    LicenseJetClient::connect(server.uri(), "test-key").unwrap()
}

fn license(value: serde_json::Value) -> License {
    License::from_value(value).unwrap()
}

// ============================================================================
// Licenses
// ============================================================================

#[tokio::test]
async fn test_get_license() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/licenses/12"))
        .and(header("Authorization", "APIKEY test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "type": "subscription",
            "status": "active",
            "subscription_term": {"identifier": "year", "length": 1}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let license = client_for(&mock_server).licenses().get(12).await.unwrap();

    assert_eq!(license.id(), Some(12));
    assert!(license.is_active());
    assert_eq!(
        license.subscription_term().and_then(|t| t.length()),
        Some(1)
    );
    assert!(!license.has_changes());
}

#[tokio::test]
async fn test_get_license_failure_is_wrapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/licenses/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "No such license"})))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .licenses()
        .get(99)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().starts_with("Failed to retrieve resource"));
    assert!(err.to_string().contains("No such license"));
}

#[tokio::test]
async fn test_create_license_posts_attributes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/licenses"))
        .and(body_json(json!({"licensing_plan_id": 3, "user_id": 8})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 40, "licensing_plan_id": 3})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut draft = License::default();
    draft.set_licensing_plan_id(3);
    draft.set_user_id(Some(8));

    let created = client_for(&mock_server)
        .licenses()
        .create(&draft)
        .await
        .unwrap();

    assert_eq!(created.id(), Some(40));
}

#[tokio::test]
async fn test_update_license_posts_to_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/licenses/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "key_limit": 3})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut existing = license(json!({"id": 5, "key_limit": 1}));
    existing.set_key_limit(Some(3));

    let updated = client_for(&mock_server)
        .licenses()
        .update(&existing)
        .await
        .unwrap();

    assert_eq!(updated.key_limit(), Some(3));
}

#[tokio::test]
async fn test_update_without_id_is_rejected() {
    let mock_server = MockServer::start().await;

    let err = client_for(&mock_server)
        .licenses()
        .update(&License::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[tokio::test]
async fn test_renew_license() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/licenses/7/renewals"))
        .and(body_json(json!({"term": "month", "length": 6})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "status": "active"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let renewed = client_for(&mock_server)
        .licenses()
        .renew(7, Some("month"), Some(6))
        .await
        .unwrap();

    assert!(renewed.is_active());
}

#[tokio::test]
async fn test_renew_without_term_sends_nulls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/licenses/7/renewals"))
        .and(body_json(json!({"term": null, "length": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server)
        .licenses()
        .renew(7, None, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_renew_update_access() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/licenses/2/update_access/term/renewals"))
        .and(body_json(json!({"term": "year", "length": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/licenses/2/update_access/version/renewals"))
        .and(body_json(json!({"version": "3.0.0"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "update_access_expiration_version": "3.0.0"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .licenses()
        .renew_update_access_term(2, "year", 1)
        .await
        .unwrap();
    let license = client
        .licenses()
        .renew_update_access_version(2, "3.0.0")
        .await
        .unwrap();

    assert_eq!(license.update_access_expiration_version(), Some("3.0.0"));
}

#[tokio::test]
async fn test_transfer_license() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/licenses/3/transfers"))
        .and(body_json(json!({"user_id": 21})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "user_id": 21})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transferred = client_for(&mock_server)
        .licenses()
        .transfer(&license(json!({"id": 3, "user_id": 20})), Some(21))
        .await
        .unwrap();

    assert_eq!(transferred.user_id(), Some(21));
}

#[tokio::test]
async fn test_rejected_transfer_reports_update_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/licenses/5/transfers"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "Unknown user"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .licenses()
        .transfer(&license(json!({"id": 5, "user_id": 20})), Some(404))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert!(err.to_string().starts_with("Failed to update resource"));
    assert!(err.to_string().contains("Unknown user"));
}

#[tokio::test]
async fn test_delete_license() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/licenses/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/licenses/4"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "Forbidden"})))
        .mount(&mock_server)
        .await;

    let licenses = client_for(&mock_server).licenses();
    licenses.delete(&license(json!({"id": 3}))).await.unwrap();

    let err = licenses
        .delete(&license(json!({"id": 4})))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert!(!err.is_not_found());
}

// ============================================================================
// Other Resources
// ============================================================================

#[tokio::test]
async fn test_license_key_create_and_delete_by_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/license_keys"))
        .and(body_json(json!({"license_id": 9, "host": "example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "license_id": 9,
            "host": "example.com",
            "key": "KEY-123"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/license_keys/KEY-123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let keys = client_for(&mock_server).license_keys();
    let mut draft = LicenseKey::default();
    draft.set_license_id(9);
    draft.set_host(Some("example.com"));

    let created = keys.create(&draft).await.unwrap();
    assert_eq!(created.key(), Some("KEY-123"));

    keys.delete(&created).await.unwrap();
    let err = keys.delete(&LicenseKey::default()).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test_case("licensing_plans/4", 4; "licensing plan")]
#[test_case("projects/6", 6; "project")]
#[test_case("users/8", 8; "user")]
#[tokio::test]
async fn test_get_by_id(resource_path: &str, id: i64) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{resource_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": id, "name": "X"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let found = match resource_path.split('/').next() {
        Some("licensing_plans") => client.licensing_plans().get(id).await.map(|r| r.id()),
        Some("projects") => client.projects().get(id).await.map(|r| r.id()),
        _ => client.users().get(id).await.map(|r| r.id()),
    };

    assert_eq!(found.unwrap(), Some(id));
}

#[tokio::test]
async fn test_update_project_and_plan() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 6, "name": "Renamed"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/licensing_plans/4"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let project = Project::from_value(json!({"id": 6, "name": "Old"})).unwrap();
    let updated = client.projects().update(&project).await.unwrap();
    assert_eq!(updated.name(), Some("Renamed"));

    let plan = LicensingPlan::from_value(json!({"id": 4})).unwrap();
    let err = client.licensing_plans().update(&plan).await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to update resource"));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_create_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({"email": "new@example.com", "name": "New", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 30,
            "email": "new@example.com",
            "name": "New"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut user = User::default();
    user.set_email("new@example.com");
    user.set_name("New");
    user.set_password("pw");

    let created = client_for(&mock_server).users().create(&user).await.unwrap();

    assert_eq!(created.id(), Some(30));
    assert_eq!(created.email(), Some("new@example.com"));
}

#[test_case("project_options"; "project options")]
#[test_case("terms"; "terms")]
#[test_case("license_keys"; "license keys")]
#[tokio::test]
async fn test_listing_paths(listing_path: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{listing_path}")))
        .and(query_param("page", "1"))
        .and(query_param("limit", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 1}, {"id": 2}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = JsonObject::new();
    let count = match listing_path {
        "project_options" => client.project_options().list().get(&params).await.map(|c| c.len()),
        "terms" => client.terms().list().get(&params).await.map(|c| c.len()),
        _ => client.license_keys().list().get(&params).await.map(|c| c.len()),
    };

    assert_eq!(count.unwrap(), 2);
}

// ============================================================================
// Root
// ============================================================================

#[tokio::test]
async fn test_permissions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "permissions": ["licenses.read", "licenses.write"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let permissions = client_for(&mock_server).root().permissions().await.unwrap();

    assert_eq!(permissions, Some(json!(["licenses.read", "licenses.write"])));
}

#[tokio::test]
async fn test_permissions_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"permissions": "all"})))
        .mount(&mock_server)
        .await;

    let permissions = client_for(&mock_server).root().permissions().await.unwrap();

    assert_eq!(permissions, None);
}
