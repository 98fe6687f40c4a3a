//! Profile modal route handlers.
//!
//! The shell renders immediately with a loading message and fetches its body
//! once. The body is either the fetch error or the read-only profile with a
//! password form. Closing happens client-side.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use tracing::instrument;

use crate::forms::{PasswordForm, PasswordSection};
use crate::middleware::RequireSession;
use crate::routes::profile::PasswordSectionTemplate;
use crate::routes::views::ProfileView;
use crate::services::ProfileService;
use crate::state::AppState;

/// Where the modal's password form posts.
pub const MODAL_PASSWORD_ACTION: &str = "/profile/modal/password";

/// Where the modal shell loads its body from.
pub const MODAL_CONTENT_URL: &str = "/profile/modal/content";

/// Modal shell template.
#[derive(Template, WebTemplate)]
#[template(path = "profile/modal.html")]
pub struct ProfileModalTemplate {
    pub content_url: &'static str,
}

/// Modal body fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "profile/modal_content.html")]
pub struct ModalContentTemplate {
    pub error: Option<String>,
    pub profile: Option<ProfileView>,
    pub password: PasswordSection,
    pub password_action: &'static str,
}

/// Render the modal shell in its loading state.
pub async fn shell(RequireSession(_): RequireSession) -> ProfileModalTemplate {
    ProfileModalTemplate {
        content_url: MODAL_CONTENT_URL,
    }
}

/// Fetch the profile and render the modal body (HTMX).
#[instrument(skip_all)]
pub async fn content(
    State(state): State<AppState>,
    RequireSession(ctx): RequireSession,
) -> ModalContentTemplate {
    let (error, profile) = match ProfileService::new(state.api().for_session(&ctx))
        .load_profile()
        .await
    {
        Ok(profile) => (None, Some(ProfileView::from(&profile))),
        Err(e) => (Some(e.to_string()), None),
    };

    ModalContentTemplate {
        error,
        profile,
        password: PasswordSection::idle(),
        password_action: MODAL_PASSWORD_ACTION,
    }
}

/// Change password from the modal (HTMX). The modal stays open.
#[instrument(skip_all)]
pub async fn change_password(
    State(state): State<AppState>,
    RequireSession(ctx): RequireSession,
    Form(form): Form<PasswordForm>,
) -> PasswordSectionTemplate {
    let password = ProfileService::new(state.api().for_session(&ctx))
        .change_password(form)
        .await;

    PasswordSectionTemplate {
        password,
        password_action: MODAL_PASSWORD_ACTION,
    }
}
