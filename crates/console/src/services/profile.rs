//! Profile workflows.
//!
//! Each workflow settles into a section state: backend and validation
//! failures become the section's error message instead of propagating, so
//! one failing form never disturbs another.

use tracing::{debug, instrument};

use tableside_core::{EditableOrganisation, UserProfile};

use crate::api::{ApiError, AuthorizedClient};
use crate::forms::{
    FormStatus, OrganisationForm, OrganisationSection, PasswordForm, PasswordSection,
    PersonalInfoForm, PersonalSection, personal::PROFILE_UPDATED,
};

/// Message for an organisation save from a profile without an editable
/// tenant or outlet.
pub const NO_EDITABLE_ORGANISATION: &str = "No editable organisation for this role";

/// Profile workflows bound to one staff member's token.
#[derive(Debug)]
pub struct ProfileService<'a> {
    client: AuthorizedClient<'a>,
}

/// Outcome of a personal information save.
#[derive(Debug)]
pub struct PersonalSave {
    pub section: PersonalSection,
    /// Profile returned by the backend, present only on success.
    pub updated: Option<UserProfile>,
}

impl<'a> ProfileService<'a> {
    #[must_use]
    pub const fn new(client: AuthorizedClient<'a>) -> Self {
        Self { client }
    }

    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged; callers render its message.
    pub async fn load_profile(&self) -> Result<UserProfile, ApiError> {
        self.client.fetch_profile().await
    }

    /// Best-effort fetch of the editable organisation's full details.
    ///
    /// Returns `None` on any failure; the caller falls back to the name
    /// embedded in the profile.
    #[instrument(skip_all, fields(scope = org.scope().label(), id = org.id()))]
    pub async fn enrich_organisation(&self, org: &EditableOrganisation) -> Option<OrganisationForm> {
        let result = match org {
            EditableOrganisation::Tenant { id, .. } => self
                .client
                .fetch_tenant_details(id)
                .await
                .map(|info| OrganisationForm::from_info(&info)),
            EditableOrganisation::Outlet { id, .. } => self
                .client
                .fetch_outlet_details(id)
                .await
                .map(|info| OrganisationForm::from_info(&info)),
        };

        match result {
            Ok(form) => Some(form),
            Err(e) => {
                debug!(error = %e, "Organisation details unavailable, using embedded name");
                None
            }
        }
    }

    /// Build the organisation section for a profile, if it has one.
    pub async fn organisation_section(&self, profile: &UserProfile) -> Option<OrganisationSection> {
        let org = profile.editable_organisation()?;
        let form = match self.enrich_organisation(&org).await {
            Some(form) => form,
            None => OrganisationForm::from_embedded(&org),
        };
        Some(OrganisationSection::new(org.scope(), form))
    }

    /// Save personal information.
    ///
    /// The full `{name, email, phoneNumber}` triple is sent whatever the
    /// user changed.
    #[instrument(skip_all)]
    pub async fn save_personal(&self, mut form: PersonalInfoForm) -> PersonalSave {
        match self.client.update_profile(&form.to_update()).await {
            Ok(updated) => {
                form.merge(&updated);
                PersonalSave {
                    section: PersonalSection {
                        form,
                        status: FormStatus::success(PROFILE_UPDATED),
                    },
                    updated: Some(updated),
                }
            }
            Err(e) => PersonalSave {
                section: PersonalSection {
                    form,
                    status: FormStatus::error(e.to_string()),
                },
                updated: None,
            },
        }
    }

    /// Save tenant or outlet details to the organisation the profile page
    /// resolved for this session.
    #[instrument(skip_all, fields(scope = org.scope().label(), id = org.id()))]
    pub async fn save_organisation(
        &self,
        org: &EditableOrganisation,
        form: OrganisationForm,
    ) -> OrganisationSection {
        let update = form.to_update();
        let result = match org {
            EditableOrganisation::Tenant { id, .. } => self
                .client
                .update_tenant_details(id, &update)
                .await
                .map(|info| OrganisationForm::from_info(&info)),
            EditableOrganisation::Outlet { id, .. } => self
                .client
                .update_outlet_details(id, &update)
                .await
                .map(|info| OrganisationForm::from_info(&info)),
        };

        let mut section = OrganisationSection::new(org.scope(), form);
        match result {
            Ok(saved) => {
                section.status = FormStatus::success(section.saved_message());
                section.form = saved;
            }
            Err(e) => section.status = FormStatus::error(e.to_string()),
        }
        section
    }

    /// Validate and submit a password change.
    ///
    /// Validation failures never reach the backend.
    #[instrument(skip_all)]
    pub async fn change_password(&self, form: PasswordForm) -> PasswordSection {
        let change = match form.validate() {
            Ok(change) => change,
            Err(e) => return PasswordSection::failed(e.to_string()),
        };

        match self.client.change_password(&change).await {
            Ok(()) => PasswordSection::changed(),
            Err(e) => PasswordSection::failed(e.to_string()),
        }
    }
}
