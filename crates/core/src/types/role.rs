//! Staff roles and the lookups that hang off them.
//!
//! Every lookup is an exhaustive `match`, so adding a variant to [`Role`]
//! fails to compile until its label, tone and scope are decided.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A known staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// Platform operator with access to every tenant.
    SuperAdmin,
    /// Administers a single tenant (restaurant group).
    TenantAdmin,
    /// Owns a tenant.
    TenantOwner,
    /// Administers a single outlet.
    OutletAdmin,
    /// Owns an outlet.
    OutletOwner,
    /// Kitchen display and ticket handling.
    KitchenStaff,
    /// Point of sale and billing.
    BillingStaff,
}

/// Which organisation a role may edit contact details for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityScope {
    Tenant,
    Outlet,
}

impl EntityScope {
    /// Human-readable section title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tenant => "Tenant",
            Self::Outlet => "Outlet",
        }
    }
}

/// Colour family used for the role badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Purple,
    Blue,
    Indigo,
    Green,
    Teal,
    Orange,
    Yellow,
    Neutral,
}

impl BadgeTone {
    /// CSS modifier class for the badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Purple => "badge--purple",
            Self::Blue => "badge--blue",
            Self::Indigo => "badge--indigo",
            Self::Green => "badge--green",
            Self::Teal => "badge--teal",
            Self::Orange => "badge--orange",
            Self::Yellow => "badge--yellow",
            Self::Neutral => "badge--neutral",
        }
    }
}

impl Role {
    /// All known roles, in display order.
    pub const ALL: [Self; 7] = [
        Self::SuperAdmin,
        Self::TenantAdmin,
        Self::TenantOwner,
        Self::OutletAdmin,
        Self::OutletOwner,
        Self::KitchenStaff,
        Self::BillingStaff,
    ];

    /// Wire name as sent by the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "superAdmin",
            Self::TenantAdmin => "tenantAdmin",
            Self::TenantOwner => "tenantOwner",
            Self::OutletAdmin => "outletAdmin",
            Self::OutletOwner => "outletOwner",
            Self::KitchenStaff => "kitchenStaff",
            Self::BillingStaff => "billingStaff",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::TenantAdmin => "Tenant Admin",
            Self::TenantOwner => "Tenant Owner",
            Self::OutletAdmin => "Outlet Admin",
            Self::OutletOwner => "Outlet Owner",
            Self::KitchenStaff => "Kitchen Staff",
            Self::BillingStaff => "Billing Staff",
        }
    }

    /// Badge colour.
    #[must_use]
    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::SuperAdmin => BadgeTone::Purple,
            Self::TenantAdmin => BadgeTone::Blue,
            Self::TenantOwner => BadgeTone::Indigo,
            Self::OutletAdmin => BadgeTone::Green,
            Self::OutletOwner => BadgeTone::Teal,
            Self::KitchenStaff => BadgeTone::Orange,
            Self::BillingStaff => BadgeTone::Yellow,
        }
    }

    /// Organisation whose contact details this role may edit.
    #[must_use]
    pub const fn entity_scope(self) -> Option<EntityScope> {
        match self {
            Self::TenantAdmin | Self::TenantOwner => Some(EntityScope::Tenant),
            Self::OutletAdmin | Self::OutletOwner => Some(EntityScope::Outlet),
            Self::SuperAdmin | Self::KitchenStaff | Self::BillingStaff => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a role name this console does not know.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRoleError(pub String);

impl std::str::FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRoleError(s.to_owned()))
    }
}

/// Role as received from the backend.
///
/// The backend may introduce roles before this console knows about them.
/// Those are kept verbatim so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRole {
    Known(Role),
    Unrecognized(String),
}

impl UserRole {
    /// Display label; unrecognized roles show the raw string.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Known(role) => role.label(),
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Badge colour; unrecognized roles are neutral.
    #[must_use]
    pub const fn tone(&self) -> BadgeTone {
        match self {
            Self::Known(role) => role.tone(),
            Self::Unrecognized(_) => BadgeTone::Neutral,
        }
    }

    /// Organisation scope; unrecognized roles never edit organisations.
    #[must_use]
    pub const fn entity_scope(&self) -> Option<EntityScope> {
        match self {
            Self::Known(role) => role.entity_scope(),
            Self::Unrecognized(_) => None,
        }
    }

    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(role) => role.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        Self::Known(role)
    }
}

impl From<String> for UserRole {
    fn from(raw: String) -> Self {
        raw.parse::<Role>()
            .map_or_else(|_| Self::Unrecognized(raw), Self::Known)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
