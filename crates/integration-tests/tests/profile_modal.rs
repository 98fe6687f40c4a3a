//! Integration tests for the profile modal.

use axum::http::{Method, StatusCode};
use serde_json::json;

use tableside_integration_tests::{TestConsole, profile_json, serve_profile};

#[tokio::test]
async fn test_shell_renders_loading_without_fetching() {
    let console = TestConsole::signed_in().await;

    let (status, body) = console.get_fragment("/profile/modal").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Loading profile..."));
    assert!(body.contains(r#"hx-get="/profile/modal/content""#));
    assert!(body.contains(r#"aria-label="Close""#));
    assert!(console.backend.requests().is_empty());
}

#[tokio::test]
async fn test_content_shows_read_only_profile() {
    let console = TestConsole::signed_in().await;
    serve_profile(&console.backend, &profile_json("outletOwner"));

    let (status, body) = console.get_fragment("/profile/modal/content").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<dd id="profile-name">Anita Menon</dd>"#));
    assert!(body.contains(">Outlet Owner</span>"));
    assert!(body.contains(r#"<dd id="profile-organisation">Koramangala</dd>"#));
    assert!(body.contains("Member since"));
    assert!(body.contains(r#"hx-post="/profile/modal/password""#));
    // the modal never edits personal or organisation details
    assert!(!body.contains(r#"id="personal-section""#));
    assert!(!body.contains(r#"id="organisation-section""#));
    assert_eq!(console.backend.requests().len(), 1);
}

#[tokio::test]
async fn test_content_shows_unauthorized_error() {
    let console = TestConsole::signed_in().await;
    console.backend.respond(
        Method::GET,
        "/users/profile",
        401,
        &json!({ "message": "Unauthorized" }),
    );

    let (status, body) = console.get_fragment("/profile/modal/content").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="profile-error">Unauthorized</div>"#));
    assert!(!body.contains(r#"id="password-section""#));
}

#[tokio::test]
async fn test_content_falls_back_to_status_text() {
    let console = TestConsole::signed_in().await;
    console
        .backend
        .respond_raw(Method::GET, "/users/profile", 503, "upstream unavailable");

    let (_, body) = console.get_fragment("/profile/modal/content").await;

    assert!(body.contains(r#"id="profile-error">Service Unavailable</div>"#));
}

#[tokio::test]
async fn test_modal_password_validation_is_local() {
    let console = TestConsole::signed_in().await;

    let (status, body) = console
        .post_fragment(
            "/profile/modal/password",
            &[
                ("current_password", "old-secret"),
                ("new_password", "abc"),
                ("confirm_password", "abc"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("New password must be at least 6 characters"));
    assert!(body.contains(r#"hx-post="/profile/modal/password""#));
    assert!(console.backend.requests().is_empty());
}

#[tokio::test]
async fn test_modal_password_success_keeps_modal_form() {
    let console = TestConsole::signed_in().await;
    console.backend.respond(
        Method::PATCH,
        "/users/profile/change-password",
        200,
        &json!({}),
    );

    let (_, body) = console
        .post_fragment(
            "/profile/modal/password",
            &[
                ("current_password", "old-secret"),
                ("new_password", "new-secret"),
                ("confirm_password", "new-secret"),
            ],
        )
        .await;

    assert!(body.contains("Password changed successfully"));
    assert!(body.contains(r#"hx-post="/profile/modal/password""#));
    assert!(body.contains(r#"name="new_password" type="password" autocomplete"#));
    assert!(!body.contains("new-secret"));
}
