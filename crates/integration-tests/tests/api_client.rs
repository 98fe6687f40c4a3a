//! Integration tests for the backend client against the stub backend.

use axum::http::{Method, StatusCode};
use secrecy::SecretString;
use serde_json::json;

use tableside_console::api::{ApiClient, ApiError};
use tableside_console::config::ApiConfig;
use tableside_core::{EntityScope, OutletId, ProfileUpdate, Role, TenantId, UserRole};
use tableside_integration_tests::{StubBackend, envelope, profile_json, serve_profile};

fn client(backend: &StubBackend) -> ApiClient {
    ApiClient::new(&ApiConfig::new(&backend.api_url()).expect("Invalid stub URL"))
        .expect("Failed to create API client")
}

#[tokio::test]
async fn test_fetch_profile_parses_data() {
    let backend = StubBackend::start().await;
    serve_profile(&backend, &profile_json("tenantOwner"));

    let profile = client(&backend)
        .authorized(SecretString::from("tok"))
        .fetch_profile()
        .await
        .expect("Profile fetch failed");

    assert_eq!(profile.name, "Anita Menon");
    assert_eq!(profile.role, UserRole::Known(Role::TenantOwner));
    assert_eq!(profile.role.entity_scope(), Some(EntityScope::Tenant));
    assert!(profile.status.is_active());

    let requests = backend.requests();
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer tok"));
}

#[tokio::test]
async fn test_error_message_prefers_message_then_error() {
    let backend = StubBackend::start().await;
    backend.respond(
        Method::PATCH,
        "/users/profile/update",
        400,
        &json!({ "error": "Phone number is invalid" }),
    );

    let err = client(&backend)
        .authorized(SecretString::from("tok"))
        .update_profile(&ProfileUpdate {
            phone_number: Some("12".to_owned()),
            ..ProfileUpdate::default()
        })
        .await
        .expect_err("Update should fail");

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.to_string(), "Phone number is invalid");
}

#[tokio::test]
async fn test_partial_update_omits_unset_fields() {
    let backend = StubBackend::start().await;
    backend.respond(
        Method::PATCH,
        "/users/profile/update",
        200,
        &envelope(profile_json("kitchenStaff")),
    );

    client(&backend)
        .authorized(SecretString::from("tok"))
        .update_profile(&ProfileUpdate {
            name: Some("Anita Menon".to_owned()),
            ..ProfileUpdate::default()
        })
        .await
        .expect("Update failed");

    let patches = backend.requests_to(&Method::PATCH, "/users/profile/update");
    assert_eq!(patches[0].body, Some(json!({ "name": "Anita Menon" })));
}

#[tokio::test]
async fn test_unparseable_success_body_is_decode_error() {
    let backend = StubBackend::start().await;
    backend.respond_raw(Method::GET, "/users/profile", 200, "<html>maintenance</html>");

    let err = client(&backend)
        .authorized(SecretString::from("tok"))
        .fetch_profile()
        .await
        .expect_err("Fetch should fail");

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.to_string(), "Unexpected response from the server");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No address");
    drop(listener);

    let api = ApiClient::new(&ApiConfig::new(&format!("http://{addr}/api/v1")).expect("URL"))
        .expect("Failed to create API client");
    let err = api
        .authorized(SecretString::from("tok"))
        .fetch_profile()
        .await
        .expect_err("Fetch should fail");

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.to_string(), "Unable to reach the server");
}

#[tokio::test]
async fn test_detail_reads_unwrap_nested_records() {
    let backend = StubBackend::start().await;
    backend.respond(
        Method::GET,
        "/tenants/t1/details",
        200,
        &envelope(json!({
            "tenant": { "_id": "t1", "name": "Spice Route" },
            "users": [],
            "orderStats": {}
        })),
    );
    backend.respond(
        Method::GET,
        "/outlets/o1",
        200,
        &envelope(json!({ "outlet": { "_id": "o1", "name": "Koramangala" } })),
    );

    let api = client(&backend);
    let authorized = api.authorized(SecretString::from("tok"));

    let tenant = authorized
        .fetch_tenant_details(&TenantId::new("t1"))
        .await
        .expect("Tenant fetch failed");
    let outlet = authorized
        .fetch_outlet_details(&OutletId::new("o1"))
        .await
        .expect("Outlet fetch failed");

    assert_eq!(tenant.name, "Spice Route");
    assert_eq!(outlet.name, "Koramangala");
}
