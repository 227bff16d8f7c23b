//! Token validation result.

use std::collections::BTreeSet;

/// Outcome of checking a token against the API.
///
/// Built incrementally: a failed check appends to `errors` without undoing
/// fields set by earlier successful checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenValidation {
    pub is_valid: bool,
    pub has_org_access: bool,
    pub username: Option<String>,
    pub scopes: BTreeSet<String>,
    pub errors: Vec<String>,
}

impl TokenValidation {
    /// Valid with no recorded errors.
    pub fn is_fully_valid(&self) -> bool {
        self.is_valid && self.errors.is_empty()
    }

    /// Required scopes absent from `scopes`, in the order given.
    pub fn missing_scopes<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|scope| !self.scopes.contains(*scope))
            .collect()
    }
}

/// Parse the comma-separated `X-OAuth-Scopes` header.
pub(crate) fn parse_scopes(header: &str) -> BTreeSet<String> {
    header
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
