//! Session extractors and lifecycle helpers.
//!
//! Provides the extractor that loads the [`SessionContext`] in route handlers
//! and the helpers that save and clear it.

use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{SessionContext, session_keys};

/// Where staff are sent to supply an access token.
pub const SESSION_BOOTSTRAP_PATH: &str = "/auth/session";

/// Extractor that requires a session context.
///
/// Full page loads without a context are redirected to the bootstrap page.
/// Fragment requests (sent with `HX-Request`) get `401` plus an
/// `HX-Redirect` header so the whole page navigates instead of swapping the
/// bootstrap form into a form section.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireSession(ctx): RequireSession,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", ctx.display_name().unwrap_or("there"))
/// }
/// ```
pub struct RequireSession(pub SessionContext);

/// Error returned when a session context is required but missing.
pub enum SessionRejection {
    /// Redirect to the bootstrap page (full page loads).
    RedirectToBootstrap,
    /// Unauthorized response (fragment requests).
    Unauthorized,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToBootstrap => Redirect::to(SESSION_BOOTSTRAP_PATH).into_response(),
            Self::Unauthorized => {
                let mut response = StatusCode::UNAUTHORIZED.into_response();
                response.headers_mut().insert(
                    "HX-Redirect",
                    HeaderValue::from_static(SESSION_BOOTSTRAP_PATH),
                );
                response
            }
        }
    }
}

/// Whether the request was issued by HTMX to swap a fragment.
pub fn is_fragment_request(parts: &Parts) -> bool {
    parts
        .headers
        .get("HX-Request")
        .is_some_and(|v| v.as_bytes() == b"true")
}

impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let rejection = if is_fragment_request(parts) {
            SessionRejection::Unauthorized
        } else {
            SessionRejection::RedirectToBootstrap
        };

        // Get the session from extensions (set by SessionManagerLayer)
        let Some(session) = parts.extensions.get::<Session>() else {
            return Err(SessionRejection::Unauthorized);
        };

        let context = load_session_context(session).await.ok_or(rejection)?;

        Ok(Self(context))
    }
}

/// Load the session context, if one has been saved.
pub async fn load_session_context(session: &Session) -> Option<SessionContext> {
    session
        .get::<SessionContext>(session_keys::SESSION_CONTEXT)
        .await
        .ok()
        .flatten()
}

/// Save the session context.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_session_context(
    session: &Session,
    context: &SessionContext,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::SESSION_CONTEXT, context).await
}

/// Clear the session context (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_session_context(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<SessionContext>(session_keys::SESSION_CONTEXT)
        .await?;
    Ok(())
}
