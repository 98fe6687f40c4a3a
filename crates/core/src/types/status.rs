//! Activation status shared by users, tenants and outlets.

use serde::{Deserialize, Serialize};

/// Whether an account or organisation is active.
///
/// The backend sends this as a plain boolean `status` field. A record
/// without the flag is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "bool", into = "bool")]
pub enum AccountStatus {
    Active,
    #[default]
    Inactive,
}

impl AccountStatus {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl From<bool> for AccountStatus {
    fn from(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }
}

impl From<AccountStatus> for bool {
    fn from(status: AccountStatus) -> Self {
        status.is_active()
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
