//! Session-related types.
//!
//! The session context replaces the browser storage of a single-page app:
//! it holds the backend access token, the display name shown in the page
//! header and the organisation the profile page offered for editing.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use tableside_core::EditableOrganisation;

/// Session-stored identity of the signed-in staff member.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Bearer token issued by the Tableside sign-in.
    access_token: String,
    /// Name shown in the console header.
    #[serde(default)]
    display_name: Option<String>,
    /// Save target of the organisation section, resolved when the profile
    /// page last rendered.
    #[serde(default)]
    editable_organisation: Option<EditableOrganisation>,
}

impl SessionContext {
    /// Create a context for a freshly supplied access token.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            display_name: None,
            editable_organisation: None,
        }
    }

    /// The bearer token, wrapped so it stays out of logs.
    #[must_use]
    pub fn access_token(&self) -> SecretString {
        SecretString::from(self.access_token.as_str())
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Replace the cached display name. Blank names clear it.
    pub fn set_display_name(&mut self, name: &str) {
        let trimmed = name.trim();
        self.display_name = (!trimmed.is_empty()).then(|| trimmed.to_owned());
    }

    #[must_use]
    pub const fn editable_organisation(&self) -> Option<&EditableOrganisation> {
        self.editable_organisation.as_ref()
    }

    pub fn set_editable_organisation(&mut self, org: Option<EditableOrganisation>) {
        self.editable_organisation = org;
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("access_token", &"[REDACTED]")
            .field("display_name", &self.display_name)
            .field("editable_organisation", &self.editable_organisation)
            .finish()
    }
}

/// Session keys for console state.
pub mod keys {
    /// Key for storing the signed-in staff member's context.
    pub const SESSION_CONTEXT: &str = "session_context";
}
