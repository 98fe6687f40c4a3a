//! Session bootstrap and logout.
//!
//! Staff sign in through the main Tableside application; the console only
//! accepts the access token it issued.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::filters;
use crate::middleware::{
    SESSION_BOOTSTRAP_PATH, clear_session_context, load_session_context, save_session_context,
};
use crate::models::SessionContext;

/// Session bootstrap form data.
#[derive(Deserialize)]
pub struct SessionForm {
    #[serde(default)]
    pub access_token: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Session bootstrap page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/session.html")]
pub struct SessionTemplate {
    pub error: Option<&'static str>,
    pub has_session: bool,
}

/// Map an error code from the query string to a message.
fn error_message(code: &str) -> &'static str {
    match code {
        "missing" => "Enter the access token issued at sign-in",
        "session" => "Could not start a session, please try again",
        _ => "Something went wrong, please try again",
    }
}

/// Strip whitespace and an optional `Bearer ` prefix from a pasted token.
fn normalize_token(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .map_or(trimmed, str::trim_start);
    (!token.is_empty()).then_some(token)
}

/// Display the session bootstrap page.
pub async fn session_page(session: Session, Query(query): Query<MessageQuery>) -> impl IntoResponse {
    SessionTemplate {
        error: query.error.as_deref().map(error_message),
        has_session: load_session_context(&session).await.is_some(),
    }
}

/// Store a supplied access token and continue to the profile.
pub async fn start_session(session: Session, Form(form): Form<SessionForm>) -> Response {
    let Some(token) = normalize_token(&form.access_token) else {
        return Redirect::to(&format!("{SESSION_BOOTSTRAP_PATH}?error=missing")).into_response();
    };

    if let Err(e) = session.cycle_id().await {
        tracing::error!("Failed to cycle session id: {}", e);
        return Redirect::to(&format!("{SESSION_BOOTSTRAP_PATH}?error=session")).into_response();
    }

    if let Err(e) = save_session_context(&session, &SessionContext::new(token)).await {
        tracing::error!("Failed to set session: {}", e);
        return Redirect::to(&format!("{SESSION_BOOTSTRAP_PATH}?error=session")).into_response();
    }

    tracing::info!("Console session started");
    Redirect::to("/profile").into_response()
}

/// Clear the session context and destroy the session.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_session_context(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    Redirect::to(SESSION_BOOTSTRAP_PATH).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  eyJ.a.b \n"), Some("eyJ.a.b"));
        assert_eq!(normalize_token("Bearer eyJ.a.b"), Some("eyJ.a.b"));
        assert_eq!(normalize_token("   "), None);
        assert_eq!(normalize_token("Bearer \t eyJ.a.b"), Some("eyJ.a.b"));
    }

    #[test]
    fn test_unknown_error_code_gets_generic_message() {
        assert_eq!(error_message("missing"), "Enter the access token issued at sign-in");
        assert_eq!(error_message("<script>"), "Something went wrong, please try again");
    }
}
