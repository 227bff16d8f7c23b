//! Process configuration.
//!
//! Everything repokit reads from the environment is gathered into
//! [`Settings`] once at startup and passed down explicitly.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::domain::{SecretDescriptor, TemplateSelector, VariableDescriptor};
use crate::error::{ConfigError, Result};

/// Environment-derived settings.
#[derive(Debug)]
pub struct Settings {
    /// Bearer token, if set.
    pub token: Option<Zeroizing<String>>,
    /// API base URL without a trailing slash.
    pub api_url: String,
    /// Organization used when none is passed on the command line.
    pub default_org: Option<String>,
    /// Template used when `--template` is not passed.
    pub default_template: TemplateSelector,
    /// Secrets provisioned on every templated repository.
    pub secrets: Vec<SecretDescriptor>,
    /// Variables provisioned on every templated repository.
    pub variables: Vec<VariableDescriptor>,
}

impl Settings {
    /// Load `.env` (if present) and read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTemplate` if `DEFAULT_TEMPLATE` is malformed.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => debug!(error = %e, "ignoring unreadable .env"),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Unset variables become empty strings for secrets; `UNITY_VERSION` and
    /// friends fall back to their defaults when unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let default_template = match non_empty(constants::DEFAULT_TEMPLATE_ENV) {
            Some(value) => TemplateSelector::parse(&value)?,
            None => TemplateSelector::None,
        };

        let api_url = non_empty(constants::API_URL_ENV)
            .unwrap_or_else(|| constants::DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let secrets = constants::PROVISIONED_SECRETS
            .iter()
            .map(|name| SecretDescriptor::new(*name, lookup(name).unwrap_or_default()))
            .collect();

        let variables = constants::PROVISIONED_VARIABLES
            .iter()
            .map(|(name, default)| {
                VariableDescriptor::new(
                    *name,
                    non_empty(name).unwrap_or_else(|| default.to_string()),
                )
            })
            .collect();

        let settings = Self {
            token: non_empty(constants::TOKEN_ENV).map(Zeroizing::new),
            api_url,
            default_org: non_empty(constants::DEFAULT_ORG_ENV),
            default_template,
            secrets,
            variables,
        };

        debug!(
            api_url = %settings.api_url,
            default_org = ?settings.default_org,
            has_token = settings.token.is_some(),
            "settings loaded"
        );

        Ok(settings)
    }

    /// The token, or `ConfigError::MissingToken`.
    pub fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingToken.into())
    }

    /// Command-line organization, falling back to `DEFAULT_ORG`.
    pub fn org(&self, cli_org: Option<String>) -> Option<String> {
        cli_org
            .filter(|o| !o.trim().is_empty())
            .or_else(|| self.default_org.clone())
    }
}
