//! Personal information form.

use serde::Deserialize;

use tableside_core::{ProfileUpdate, UserProfile};

use super::FormStatus;

/// Message shown after the backend accepts a profile update.
pub const PROFILE_UPDATED: &str = "Profile updated successfully";

/// Personal information form data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PersonalInfoForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
}

impl PersonalInfoForm {
    /// Pre-fill from a fetched profile.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone_number: profile.phone_number.clone(),
        }
    }

    /// Request body carrying the full current triple.
    ///
    /// Untouched fields are sent unchanged alongside edited ones.
    #[must_use]
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            phone_number: Some(self.phone_number.clone()),
        }
    }

    /// Merge the backend's response into the form.
    pub fn merge(&mut self, updated: &UserProfile) {
        self.name.clone_from(&updated.name);
        self.email.clone_from(&updated.email);
        self.phone_number.clone_from(&updated.phone_number);
    }
}

/// Render state of the personal information section.
#[derive(Debug, Clone, Default)]
pub struct PersonalSection {
    pub form: PersonalInfoForm,
    pub status: FormStatus,
}

impl PersonalSection {
    #[must_use]
    pub fn loaded(profile: &UserProfile) -> Self {
        Self {
            form: PersonalInfoForm::from_profile(profile),
            status: FormStatus::Idle,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn profile() -> UserProfile {
        serde_json::from_value(json!({
            "id": "u1",
            "name": "Kiran",
            "email": "kiran@spiceroute.in",
            "phoneNumber": "+91 90000 00001",
            "role": "billingStaff",
            "status": true
        }))
        .unwrap()
    }

    #[test]
    fn test_update_carries_full_triple() {
        let mut form = PersonalInfoForm::from_profile(&profile());
        form.name = "Kiran Rao".to_owned();

        assert_eq!(
            serde_json::to_value(form.to_update()).unwrap(),
            json!({
                "name": "Kiran Rao",
                "email": "kiran@spiceroute.in",
                "phoneNumber": "+91 90000 00001"
            })
        );
    }

    #[test]
    fn test_merge_takes_backend_values() {
        let mut form = PersonalInfoForm {
            name: "kiran rao ".to_owned(),
            ..PersonalInfoForm::default()
        };
        let mut updated = profile();
        updated.name = "Kiran Rao".to_owned();

        form.merge(&updated);

        assert_eq!(form.name, "Kiran Rao");
        assert_eq!(form.email, "kiran@spiceroute.in");
    }
}
