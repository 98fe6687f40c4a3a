//! Core types for the Tableside console.
//!
//! Type-safe wrappers for identities, roles, statuses and the records
//! exchanged with the backend.

pub mod id;
pub mod profile;
pub mod role;
pub mod status;
pub mod update;

pub use id::*;
pub use profile::{
    Contacts, EditableOrganisation, OrganisationInfo, OutletInfo, OutletRef, TenantInfo,
    TenantRef, UserProfile,
};
pub use role::{BadgeTone, EntityScope, Role, UnknownRoleError, UserRole};
pub use status::AccountStatus;
pub use update::{OrganisationUpdate, PasswordChange, ProfileUpdate};
