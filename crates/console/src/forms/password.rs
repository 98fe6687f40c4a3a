//! Password change form.

use serde::Deserialize;
use thiserror::Error;

use tableside_core::PasswordChange;

use super::FormStatus;

/// Minimum length of a new password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Message shown after the backend accepts a new password.
pub const PASSWORD_CHANGED: &str = "Password changed successfully";

/// Password change form data.
#[derive(Clone, Default, Deserialize)]
pub struct PasswordForm {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl std::fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordForm").finish_non_exhaustive()
    }
}

/// Local validation failures; these never reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordFormError {
    #[error("New passwords do not match")]
    Mismatch,
    #[error("New password must be at least 6 characters")]
    TooShort,
}

impl PasswordForm {
    /// Check the form and build the request body.
    ///
    /// # Errors
    ///
    /// Returns `Mismatch` if the confirmation differs from the new password,
    /// otherwise `TooShort` if the new password has fewer than
    /// [`MIN_PASSWORD_LENGTH`] characters.
    pub fn validate(&self) -> Result<PasswordChange, PasswordFormError> {
        if self.new_password != self.confirm_password {
            return Err(PasswordFormError::Mismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordFormError::TooShort);
        }

        Ok(PasswordChange {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Render state of a password section.
///
/// Holds only the outcome: password inputs always render empty, so a
/// submitted password is never written back into a page.
#[derive(Debug, Clone, Default)]
pub struct PasswordSection {
    pub status: FormStatus,
}

impl PasswordSection {
    /// Fresh, empty section.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Successful change.
    #[must_use]
    pub fn changed() -> Self {
        Self {
            status: FormStatus::success(PASSWORD_CHANGED),
        }
    }

    /// Failed change, locally or at the backend.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::error(message),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(current: &str, new: &str, confirm: &str) -> PasswordForm {
        PasswordForm {
            current_password: current.to_owned(),
            new_password: new.to_owned(),
            confirm_password: confirm.to_owned(),
        }
    }

    #[test]
    fn test_short_password_rejected() {
        let err = form("old-secret", "abc", "abc").validate().unwrap_err();
        assert_eq!(err, PasswordFormError::TooShort);
        assert_eq!(err.to_string(), "New password must be at least 6 characters");
    }

    #[test]
    fn test_mismatch_rejected() {
        let err = form("old-secret", "abcdef", "abcdeg").validate().unwrap_err();
        assert_eq!(err, PasswordFormError::Mismatch);
        assert_eq!(err.to_string(), "New passwords do not match");
    }

    #[test]
    fn test_mismatch_checked_before_length() {
        let err = form("old-secret", "abc", "abd").validate().unwrap_err();
        assert_eq!(err, PasswordFormError::Mismatch);
    }

    #[test]
    fn test_exactly_minimum_length_accepted() {
        let change = form("old-secret", "abcdef", "abcdef").validate().unwrap();
        assert_eq!(change.current_password, "old-secret");
        assert_eq!(change.new_password, "abcdef");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // five characters, more than six bytes
        assert_eq!(
            form("x", "ééééé", "ééééé").validate().unwrap_err(),
            PasswordFormError::TooShort
        );
    }

    #[test]
    fn test_changed_section_reports_success() {
        let section = PasswordSection::changed();
        assert_eq!(section.status.success_message(), Some(PASSWORD_CHANGED));
    }

    #[test]
    fn test_failed_section_keeps_only_message() {
        let section = PasswordSection::failed(PasswordFormError::TooShort.to_string());
        assert_eq!(
            section.status.error_message(),
            Some("New password must be at least 6 characters")
        );
        assert!(!format!("{section:?}").contains("hunter22"));
    }

    #[test]
    fn test_form_debug_hides_passwords() {
        let debug = format!("{:?}", form("hunter22", "abcdef", "abcdef"));
        assert!(!debug.contains("hunter22"));
    }
}
