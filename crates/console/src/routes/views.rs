//! Display data shared by the profile page and modal.

use tableside_core::UserProfile;

/// Read-only profile fields for templates.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role_label: String,
    pub role_badge: &'static str,
    pub status_label: &'static str,
    pub is_active: bool,
    pub organisation: Option<OrganisationView>,
    pub member_since: Option<String>,
}

/// Organisation the profile is attached to.
#[derive(Debug, Clone)]
pub struct OrganisationView {
    pub label: &'static str,
    pub name: String,
}

impl From<&UserProfile> for ProfileView {
    fn from(profile: &UserProfile) -> Self {
        let organisation = profile
            .organisation_name()
            .map(|(scope, name)| OrganisationView {
                label: scope.label(),
                name: name.to_owned(),
            });

        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone_number: profile.phone_number.clone(),
            role_label: profile.role.label().to_owned(),
            role_badge: profile.role.tone().css_class(),
            status_label: profile.status.label(),
            is_active: profile.status.is_active(),
            organisation,
            member_since: profile
                .created_at
                .map(|at| at.format("%-d %B %Y").to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn view(value: serde_json::Value) -> ProfileView {
        let profile: UserProfile = serde_json::from_value(value).unwrap();
        ProfileView::from(&profile)
    }

    #[test]
    fn test_known_role_and_status() {
        let view = view(json!({
            "_id": "u1",
            "name": "Anita",
            "email": "anita@spiceroute.in",
            "role": "outletOwner",
            "status": true,
            "outlet": { "outletId": "o1", "name": "Koramangala" },
            "createdAt": "2024-03-05T10:00:00Z"
        }));

        assert_eq!(view.role_label, "Outlet Owner");
        assert_eq!(view.role_badge, "badge--teal");
        assert_eq!(view.status_label, "Active");
        assert_eq!(view.member_since.as_deref(), Some("5 March 2024"));
        let org = view.organisation.unwrap();
        assert_eq!(org.label, "Outlet");
        assert_eq!(org.name, "Koramangala");
    }

    #[test]
    fn test_unknown_role_shown_verbatim() {
        let view = view(json!({
            "id": "u2",
            "name": "Ravi",
            "email": "ravi@spiceroute.in",
            "role": "deliveryPartner",
            "status": false
        }));

        assert_eq!(view.role_label, "deliveryPartner");
        assert_eq!(view.role_badge, "badge--neutral");
        assert_eq!(view.status_label, "Inactive");
        assert!(view.organisation.is_none());
        assert!(view.member_since.is_none());
    }
}
