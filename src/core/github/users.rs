//! Authentication and token validation.

use serde::Deserialize;
use tracing::{debug, info};

use super::{GitHub, Target};
use crate::core::constants::REQUIRED_SCOPES;
use crate::core::domain::{parse_scopes, TokenValidation};
use crate::core::validation::validate_owner_name;
use crate::error::{Error, GithubError, Result};

/// The identity behind the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub login: String,
    /// Scopes granted to a classic token, from `X-OAuth-Scopes`.
    pub scopes: std::collections::BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    login: String,
}

impl GitHub {
    /// Fetch the authenticated user and the token's granted scopes.
    ///
    /// # Errors
    ///
    /// Returns `GithubError::Authentication` if the token is rejected.
    pub async fn authenticated_user(&self) -> Result<AuthenticatedUser> {
        let target = Target::new("read", "authenticated user", "read:user");
        let response = self.send(self.http.get(self.url("/user")), &target).await?;

        let scopes = response
            .headers()
            .get("x-oauth-scopes")
            .and_then(|v| v.to_str().ok())
            .map(parse_scopes)
            .unwrap_or_default();

        let body: UserBody = response.json().await?;
        debug!(login = %body.login, scopes = scopes.len(), "authenticated");

        Ok(AuthenticatedUser {
            login: body.login,
            scopes,
        })
    }

    /// Check that an organization is readable with this token.
    ///
    /// # Errors
    ///
    /// Returns `GithubError::NotFound` or `GithubError::Permission` when it is not.
    pub async fn get_organization(&self, org: &str) -> Result<()> {
        validate_owner_name(org)?;
        let target = Target::new("read", format!("organization {}", org), "read:org");
        let _: serde_json::Value = self.get_json(&format!("/orgs/{}", org), &target).await?;
        Ok(())
    }

    /// Validate the token and, if given, access to `org`.
    ///
    /// Never fails for expected validation problems: missing scopes and an
    /// inaccessible organization are appended to `errors`. Only a failure of
    /// the initial authentication call short-circuits, leaving
    /// `is_valid == false`.
    pub async fn validate_token(&self, org: Option<&str>) -> TokenValidation {
        let mut validation = TokenValidation::default();

        let user = match self.authenticated_user().await {
            Ok(user) => user,
            Err(e) => {
                let reason = match e {
                    Error::Github(GithubError::Authentication(message)) => message,
                    other => other.to_string(),
                };
                validation
                    .errors
                    .push(format!("authentication failed: {}", reason));
                return validation;
            }
        };

        validation.is_valid = true;
        validation.username = Some(user.login);
        validation.scopes = user.scopes;

        let missing = validation.missing_scopes(REQUIRED_SCOPES);
        if !missing.is_empty() {
            let err = GithubError::Scope(missing.iter().map(|s| s.to_string()).collect());
            validation.errors.push(err.to_string());
        }

        if let Some(org) = org {
            match self.get_organization(org).await {
                Ok(()) => validation.has_org_access = true,
                Err(e) => {
                    debug!(org, error = %e, "organization check failed");
                    validation
                        .errors
                        .push(format!("no access to organization: {}", org));
                }
            }
        }

        info!(
            username = ?validation.username,
            errors = validation.errors.len(),
            "token validated"
        );

        validation
    }
}
