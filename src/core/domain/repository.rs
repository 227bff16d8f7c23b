//! Records returned by the GitHub API.

use serde::{Deserialize, Serialize};

/// Account owning a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// A repository as returned by the create, get and list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub full_name: String,
    pub private: bool,
    #[serde(default)]
    pub html_url: String,
    pub owner: Owner,
}

impl RepositoryRecord {
    /// Visibility label for display.
    pub fn visibility(&self) -> &'static str {
        if self.private {
            "private"
        } else {
            "public"
        }
    }
}

/// A deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Environment {
    pub name: String,
}

/// An Actions secret. The API never returns values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SecretEntry {
    pub name: String,
}

/// An Actions variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// The key secrets must be sealed against.
///
/// Rotates on the server side, so it is fetched right before every seal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryPublicKey {
    pub key_id: String,
    pub key: String,
}
