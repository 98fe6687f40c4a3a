//! Profile page route handlers.
//!
//! The page renders three independent form sections. Each section posts to
//! its own endpoint and gets back only its own fragment (HTMX swap), so a
//! failed save in one section leaves the others untouched.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::forms::{
    OrganisationForm, OrganisationSection, PasswordForm, PasswordSection, PersonalInfoForm,
    PersonalSection,
};
use crate::middleware::{RequireSession, save_session_context};
use crate::models::SessionContext;
use crate::routes::views::ProfileView;
use crate::services::{NO_EDITABLE_ORGANISATION, ProfileService};
use crate::state::AppState;

/// Where the page's password form posts.
pub const PAGE_PASSWORD_ACTION: &str = "/profile/password";

// =============================================================================
// Templates
// =============================================================================

/// Profile page template.
///
/// `error` is set instead of the sections when the profile fetch fails.
#[derive(Template, WebTemplate)]
#[template(path = "profile/index.html")]
pub struct ProfilePageTemplate {
    pub display_name: Option<String>,
    pub error: Option<String>,
    pub profile: Option<ProfileView>,
    pub personal: Option<PersonalSection>,
    pub organisation: Option<OrganisationSection>,
    pub password: PasswordSection,
    pub password_action: &'static str,
}

/// Personal information fragment (for HTMX).
///
/// Carries an out-of-band header update when the saved name changed.
#[derive(Template, WebTemplate)]
#[template(path = "partials/personal_fragment.html")]
pub struct PersonalSectionTemplate {
    pub personal: PersonalSection,
    pub header_name: Option<String>,
}

/// Organisation details fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/organisation_section.html")]
pub struct OrganisationSectionTemplate {
    pub organisation: OrganisationSection,
}

/// Organisation section for a session with nothing to edit (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/organisation_unavailable.html")]
pub struct OrganisationUnavailableTemplate {
    pub message: &'static str,
}

/// Password fragment (for HTMX), shared with the modal.
#[derive(Template, WebTemplate)]
#[template(path = "partials/password_section.html")]
pub struct PasswordSectionTemplate {
    pub password: PasswordSection,
    pub password_action: &'static str,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Apply `update` to the context, saving the session only if it changed.
async fn update_session_context(
    session: &Session,
    ctx: &mut SessionContext,
    update: impl FnOnce(&mut SessionContext),
) -> Result<(), tower_sessions::session::Error> {
    let before = ctx.clone();
    update(ctx);
    if *ctx == before {
        return Ok(());
    }
    save_session_context(session, ctx).await
}

// =============================================================================
// Routes
// =============================================================================

/// Display the profile page.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    RequireSession(mut ctx): RequireSession,
) -> Result<ProfilePageTemplate, AppError> {
    let service = ProfileService::new(state.api().for_session(&ctx));

    let profile = match service.load_profile().await {
        Ok(profile) => profile,
        Err(e) => {
            return Ok(ProfilePageTemplate {
                display_name: ctx.display_name().map(str::to_owned),
                error: Some(e.to_string()),
                profile: None,
                personal: None,
                organisation: None,
                password: PasswordSection::idle(),
                password_action: PAGE_PASSWORD_ACTION,
            });
        }
    };

    let organisation = service.organisation_section(&profile).await;
    update_session_context(&session, &mut ctx, |ctx| {
        ctx.set_display_name(&profile.name);
        ctx.set_editable_organisation(profile.editable_organisation());
    })
    .await?;

    Ok(ProfilePageTemplate {
        display_name: ctx.display_name().map(str::to_owned),
        error: None,
        profile: Some(ProfileView::from(&profile)),
        personal: Some(PersonalSection::loaded(&profile)),
        organisation,
        password: PasswordSection::idle(),
        password_action: PAGE_PASSWORD_ACTION,
    })
}

/// Save personal information (HTMX).
#[instrument(skip_all)]
pub async fn save_personal(
    State(state): State<AppState>,
    session: Session,
    RequireSession(mut ctx): RequireSession,
    Form(form): Form<PersonalInfoForm>,
) -> Result<PersonalSectionTemplate, AppError> {
    let saved = ProfileService::new(state.api().for_session(&ctx))
        .save_personal(form)
        .await;

    let header_name = match &saved.updated {
        Some(updated) => {
            update_session_context(&session, &mut ctx, |ctx| ctx.set_display_name(&updated.name))
                .await?;
            ctx.display_name().map(str::to_owned)
        }
        None => None,
    };

    Ok(PersonalSectionTemplate {
        personal: saved.section,
        header_name,
    })
}

/// Save tenant or outlet details (HTMX).
///
/// The target is whatever the profile page last offered this session; a
/// session it offered nothing gets the message in place of the form.
#[instrument(skip_all)]
pub async fn save_organisation(
    State(state): State<AppState>,
    RequireSession(ctx): RequireSession,
    Form(form): Form<OrganisationForm>,
) -> Response {
    let Some(org) = ctx.editable_organisation() else {
        return OrganisationUnavailableTemplate {
            message: NO_EDITABLE_ORGANISATION,
        }
        .into_response();
    };

    let organisation = ProfileService::new(state.api().for_session(&ctx))
        .save_organisation(org, form)
        .await;
    OrganisationSectionTemplate { organisation }.into_response()
}

/// Change password from the profile page (HTMX).
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
        password_action: PAGE_PASSWORD_ACTION,
    }
}
