//! Tenant / outlet contact details form.

use serde::Deserialize;

use tableside_core::{
    Contacts, EditableOrganisation, EntityScope, OrganisationInfo, OrganisationUpdate,
};

use super::FormStatus;

/// Organisation contact details form data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrganisationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
}

impl OrganisationForm {
    /// Pre-fill from a fetched tenant or outlet.
    #[must_use]
    pub fn from_info<Id>(info: &OrganisationInfo<Id>) -> Self {
        let contacts = info.contacts.clone().unwrap_or_default();
        Self {
            name: info.name.clone(),
            address: info.address.clone().unwrap_or_default(),
            contact_email: contacts.email.unwrap_or_default(),
            contact_phone: contacts.phone_number.unwrap_or_default(),
        }
    }

    /// Pre-fill only the name embedded in the profile.
    #[must_use]
    pub fn from_embedded(org: &EditableOrganisation) -> Self {
        Self {
            name: org.embedded_name().to_owned(),
            ..Self::default()
        }
    }

    /// Request body with every field of the form.
    #[must_use]
    pub fn to_update(&self) -> OrganisationUpdate {
        OrganisationUpdate {
            name: Some(self.name.clone()),
            address: Some(self.address.clone()),
            contacts: Some(Contacts {
                email: Some(self.contact_email.clone()),
                phone_number: Some(self.contact_phone.clone()),
            }),
        }
    }
}

/// Render state of the organisation section.
#[derive(Debug, Clone)]
pub struct OrganisationSection {
    pub scope: EntityScope,
    pub form: OrganisationForm,
    pub status: FormStatus,
}

impl OrganisationSection {
    #[must_use]
    pub const fn new(scope: EntityScope, form: OrganisationForm) -> Self {
        Self {
            scope,
            form,
            status: FormStatus::Idle,
        }
    }

    /// Section title, e.g. "Outlet".
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.scope.label()
    }

    /// Success message for this scope.
    #[must_use]
    pub const fn saved_message(&self) -> &'static str {
        match self.scope {
            EntityScope::Tenant => "Tenant details updated successfully",
            EntityScope::Outlet => "Outlet details updated successfully",
        }
    }
}
