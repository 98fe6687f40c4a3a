//! HTTP route handlers for the console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Redirect to /profile
//! GET  /health                  - Health check
//!
//! # Session
//! GET  /auth/session            - Session bootstrap form
//! POST /auth/session            - Store access token
//! POST /auth/logout             - Clear session
//!
//! # Profile (requires session)
//! GET  /profile                 - Profile page
//! POST /profile/personal        - Save personal info (returns section fragment)
//! POST /profile/organisation    - Save tenant/outlet details (returns section fragment)
//! POST /profile/password        - Change password (returns section fragment)
//!
//! # Profile modal (HTMX fragments, requires session)
//! GET  /profile/modal           - Modal shell ("Loading profile...")
//! GET  /profile/modal/content   - Modal body
//! POST /profile/modal/password  - Change password (returns section fragment)
//! ```

pub mod auth;
pub mod modal;
pub mod profile;
pub mod views;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the session routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(auth::session_page).post(auth::start_session))
        .route("/logout", post(auth::logout))
}

/// Create the profile routes router.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::show))
        .route("/personal", post(profile::save_personal))
        .route("/organisation", post(profile::save_organisation))
        .route("/password", post(profile::change_password))
        .route("/modal", get(modal::shell))
        .route("/modal/content", get(modal::content))
        .route("/modal/password", post(modal::change_password))
}

/// Create all routes for the console.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/profile") }))
        // Profile page and modal
        .nest("/profile", profile_routes())
        // Session bootstrap
        .nest("/auth", auth_routes())
}
