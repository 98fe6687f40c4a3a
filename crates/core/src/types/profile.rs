//! User profile and organisation records as served by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{OutletId, TenantId, UserId};
use super::role::{EntityScope, UserRole};
use super::status::AccountStatus;

/// The signed-in staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    pub role: UserRole,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlet: Option<OutletRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<TenantRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Weak reference to the outlet a user belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletRef {
    pub outlet_id: OutletId,
    #[serde(default)]
    pub name: String,
}

/// Weak reference to the tenant a user belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRef {
    pub tenant_id: TenantId,
    #[serde(default)]
    pub name: String,
}

/// The organisation whose contact details this profile may edit.
///
/// At most one exists per profile: the role picks the scope and the
/// matching weak reference must carry a non-blank ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "camelCase")]
pub enum EditableOrganisation {
    Tenant { id: TenantId, name: String },
    Outlet { id: OutletId, name: String },
}

impl EditableOrganisation {
    #[must_use]
    pub const fn scope(&self) -> EntityScope {
        match self {
            Self::Tenant { .. } => EntityScope::Tenant,
            Self::Outlet { .. } => EntityScope::Outlet,
        }
    }

    /// Display name embedded in the profile.
    #[must_use]
    pub fn embedded_name(&self) -> &str {
        match self {
            Self::Tenant { name, .. } | Self::Outlet { name, .. } => name,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Tenant { id, .. } => id.as_str(),
            Self::Outlet { id, .. } => id.as_str(),
        }
    }
}

impl UserProfile {
    /// Resolve the organisation section this profile is allowed to edit.
    #[must_use]
    pub fn editable_organisation(&self) -> Option<EditableOrganisation> {
        match self.role.entity_scope()? {
            EntityScope::Tenant => self
                .tenant
                .as_ref()
                .filter(|t| !t.tenant_id.is_blank())
                .map(|t| EditableOrganisation::Tenant {
                    id: t.tenant_id.clone(),
                    name: t.name.clone(),
                }),
            EntityScope::Outlet => self
                .outlet
                .as_ref()
                .filter(|o| !o.outlet_id.is_blank())
                .map(|o| EditableOrganisation::Outlet {
                    id: o.outlet_id.clone(),
                    name: o.name.clone(),
                }),
        }
    }

    /// Scope and name of whichever organisation the profile is attached
    /// to, outlet first.
    #[must_use]
    pub fn organisation_name(&self) -> Option<(EntityScope, &str)> {
        self.outlet
            .as_ref()
            .map(|o| (EntityScope::Outlet, o.name.as_str()))
            .or_else(|| {
                self.tenant
                    .as_ref()
                    .map(|t| (EntityScope::Tenant, t.name.as_str()))
            })
            .filter(|(_, name)| !name.is_empty())
    }
}

/// Contact details of a tenant or outlet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// A tenant or outlet as held by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationInfo<Id> {
    #[serde(alias = "_id")]
    pub id: Id,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Contacts>,
    #[serde(default)]
    pub status: AccountStatus,
}

pub type TenantInfo = OrganisationInfo<TenantId>;
pub type OutletInfo = OrganisationInfo<OutletId>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::role::Role;

    fn profile(value: serde_json::Value) -> UserProfile {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_profile_parses_backend_shape() {
        let p = profile(json!({
            "_id": "u1",
            "name": "Asha",
            "email": "asha@example.com",
            "phoneNumber": "+91 98450 00000",
            "role": "outletOwner",
            "status": true,
            "outlet": { "outletId": "o1", "name": "Indiranagar" },
            "createdAt": "2024-03-01T10:00:00Z"
        }));

        assert_eq!(p.id.as_str(), "u1");
        assert_eq!(p.role, UserRole::Known(Role::OutletOwner));
        assert_eq!(p.status, AccountStatus::Active);
        assert!(p.created_at.is_some());
        assert_eq!(
            p.organisation_name(),
            Some((EntityScope::Outlet, "Indiranagar"))
        );
    }

    #[test]
    fn test_profile_without_status_is_inactive() {
        let p = profile(json!({
            "id": "u1", "name": "A", "email": "a@x.io", "role": "billingStaff"
        }));

        assert_eq!(p.status, AccountStatus::Inactive);
    }

    #[test]
    fn test_tenant_name_used_without_outlet() {
        let p = profile(json!({
            "id": "u1", "name": "A", "email": "a@x.io", "role": "tenantOwner",
            "tenant": { "tenantId": "t1", "name": "Spice Route" }
        }));

        assert_eq!(
            p.organisation_name(),
            Some((EntityScope::Tenant, "Spice Route"))
        );
    }

    #[test]
    fn test_editable_organisation_survives_serialization() {
        let org = EditableOrganisation::Outlet {
            id: OutletId::new("o1"),
            name: "Koramangala".to_owned(),
        };
        let value = serde_json::to_value(&org).unwrap();
        assert_eq!(value["scope"], "outlet");
        let restored: EditableOrganisation = serde_json::from_value(value).unwrap();
        assert_eq!(restored, org);
    }

    #[test]
    fn test_outlet_owner_edits_outlet() {
        let p = profile(json!({
            "id": "u1", "name": "A", "email": "a@x.io", "role": "outletOwner",
            "outlet": { "outletId": "o1", "name": "Koramangala" }
        }));

        assert_eq!(
            p.editable_organisation(),
            Some(EditableOrganisation::Outlet {
                id: OutletId::new("o1"),
                name: "Koramangala".to_owned(),
            })
        );
    }

    #[test]
    fn test_tenant_owner_edits_tenant() {
        let p = profile(json!({
            "id": "u1", "name": "A", "email": "a@x.io", "role": "tenantOwner",
            "tenant": { "tenantId": "t1", "name": "Spice Route" },
            "outlet": { "outletId": "o1", "name": "Koramangala" }
        }));

        let org = p.editable_organisation().unwrap();
        assert_eq!(org.scope(), EntityScope::Tenant);
        assert_eq!(org.id(), "t1");
    }

    #[test]
    fn test_kitchen_staff_edits_nothing() {
        let p = profile(json!({
            "id": "u1", "name": "A", "email": "a@x.io", "role": "kitchenStaff",
            "outlet": { "outletId": "o1", "name": "Koramangala" }
        }));

        assert_eq!(p.editable_organisation(), None);
    }

    #[test]
    fn test_outlet_scope_without_outlet_id_edits_nothing() {
        let p = profile(json!({
            "id": "u1", "name": "A", "email": "a@x.io", "role": "outletAdmin",
            "outlet": { "outletId": "", "name": "Koramangala" }
        }));

        assert_eq!(p.editable_organisation(), None);
    }

    #[test]
    fn test_organisation_info_defaults() {
        let info: OutletInfo = serde_json::from_value(json!({
            "_id": "o1",
            "name": "Koramangala"
        }))
        .unwrap();

        assert_eq!(info.id, OutletId::new("o1"));
        assert_eq!(info.contacts, None);
        assert_eq!(info.status, AccountStatus::Inactive);
    }
}
