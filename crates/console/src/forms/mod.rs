//! Form input types and per-section state.
//!
//! Each form on the profile page (and the modal's password form) owns an
//! independent section state. A failed submit in one section never touches
//! another.

pub mod organisation;
pub mod password;
pub mod personal;

pub use organisation::{OrganisationForm, OrganisationSection};
pub use password::{MIN_PASSWORD_LENGTH, PasswordForm, PasswordFormError, PasswordSection};
pub use personal::{PersonalInfoForm, PersonalSection};

/// Outcome of the last submit of a form section.
///
/// The in-flight `submitting` state lives in the browser (HTMX disables the
/// form while the request is pending); the server only ever renders a
/// settled state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Error(String),
    Success(String),
}

impl FormStatus {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        match self {
            Self::Success(message) => Some(message),
            _ => None,
        }
    }
}
