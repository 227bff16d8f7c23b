//! Constants used throughout repokit.
//!
//! Centralizes environment variable names, API defaults, and the set of
//! secrets and variables provisioned on every new repository.

/// Bearer token for the GitHub API.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Override for the API base URL (GitHub Enterprise, tests).
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Organization used when none is given on the command line.
pub const DEFAULT_ORG_ENV: &str = "DEFAULT_ORG";

/// Template selector used when `--template` is not given.
pub const DEFAULT_TEMPLATE_ENV: &str = "DEFAULT_TEMPLATE";

/// Log filter directive.
pub const LOG_ENV: &str = "REPOKIT_LOG";

/// Public GitHub API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version pinned on every request.
pub const API_VERSION: &str = "2022-11-28";

/// Template selector that disables templating.
pub const NO_TEMPLATE: &str = "none";

/// Scopes a token must carry, in reporting order.
pub const REQUIRED_SCOPES: &[&str] = &["repo", "workflow", "admin:org"];

/// Page size for listing endpoints.
pub const PER_PAGE: usize = 100;

/// Actions secrets created on every templated repository.
///
/// Each value is read from the environment variable of the same name.
pub const PROVISIONED_SECRETS: &[&str] = &[
    "DIAWI_TOKEN",
    "KEYCHAIN_PASSWORD",
    "SLACK_TOKEN",
    "UNITY_EMAIL",
    "UNITY_PASSWORD",
];

/// Actions variables created on every templated repository, with defaults.
pub const PROVISIONED_VARIABLES: &[(&str, &str)] = &[("UNITY_VERSION", "2022.3.50f1")];
