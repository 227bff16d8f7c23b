//! Validate command - check the token's scopes and organization access.

use crate::cli::output;
use crate::core::domain::TokenValidation;
use crate::core::github::GitHub;
use crate::error::{Error, GithubError, Result};

/// Validate the token and print every problem found.
///
/// # Errors
///
/// Returns `Error::TokenInvalid` unless validation reports no errors.
pub async fn execute(client: &GitHub, org: Option<&str>) -> Result<()> {
    let validation = client.validate_token(org).await;

    if validation.is_fully_valid() {
        output::success("token is fully valid and has all required permissions");
        if let Some(user) = &validation.username {
            output::kv("user", user);
        }
        if let Some(org) = org {
            output::kv("organization", org);
        }
        return Ok(());
    }

    output::error("token validation failed:");
    for err in &validation.errors {
        output::list_item(err);
    }
    Err(Error::TokenInvalid(validation.errors.len()))
}

/// Require a valid token and, when `org` is given, access to it.
///
/// Scope problems are shown as warnings; the API rejects the individual
/// calls that actually need a missing scope.
///
/// # Errors
///
/// Returns `Error::TokenInvalid` if the token is rejected, or
/// `GithubError::Permission` if the organization is inaccessible.
pub async fn require_access(client: &GitHub, org: Option<&str>) -> Result<TokenValidation> {
    let validation = client.validate_token(org).await;

    if !validation.is_valid {
        for err in &validation.errors {
            output::error(err);
        }
        return Err(Error::TokenInvalid(validation.errors.len()));
    }

    if let Some(org) = org {
        if !validation.has_org_access {
            return Err(GithubError::Permission {
                action: format!("access organization {}", org),
                scope: "admin:org",
            }
            .into());
        }
    }

    for err in &validation.errors {
        output::warn(err);
    }

    Ok(validation)
}
