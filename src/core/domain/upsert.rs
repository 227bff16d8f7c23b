//! Create-or-update outcomes.

use crate::error::Error;

/// Whether an upsert created a new entry or replaced an existing one.
///
/// Decided by listing entries before the write, not by the response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

impl UpsertOutcome {
    pub(crate) fn from_existing(exists: bool) -> Self {
        if exists {
            Self::Updated
        } else {
            Self::Created
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

impl std::fmt::Display for UpsertOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of provisioning a single secret or variable.
#[derive(Debug)]
pub struct ItemResult {
    pub name: String,
    /// Display text for the configured value, never the secret itself.
    pub detail: String,
    pub outcome: Result<UpsertOutcome, Error>,
}

/// Per-item results of provisioning the configured set.
#[derive(Debug, Default)]
pub struct ProvisionReport {
    pub secrets: Vec<ItemResult>,
    pub variables: Vec<ItemResult>,
}

impl ProvisionReport {
    /// Number of items that failed.
    pub fn failures(&self) -> usize {
        self.secrets
            .iter()
            .chain(&self.variables)
            .filter(|item| item.outcome.is_err())
            .count()
    }
}
