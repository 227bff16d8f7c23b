//! Error types for repokit.
//!
//! Failures from the GitHub API are mapped into [`GithubError`] once, at the
//! client boundary. Everything above the client only sees these variants.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Github(#[from] GithubError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("token validation failed with {0} error(s)")]
    TokenInvalid(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors raised while talking to the GitHub API.
#[derive(Error, Debug)]
pub enum GithubError {
    /// The credential was rejected.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The credential lacks one or more required scopes.
    #[error("missing required scopes: {}", .0.join(", "))]
    Scope(Vec<String>),

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("permission denied: {action}")]
    Permission {
        action: String,
        /// Scope the token most likely lacks.
        scope: &'static str,
    },

    #[error("request failed: {0}")]
    Transport(String),
}

/// Sealed-box encryption errors.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid base64 public key: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("sealing failed")]
    SealFailed,
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GITHUB_TOKEN is not set")]
    MissingToken,

    #[error("invalid template selector '{value}': {reason}")]
    InvalidTemplate { value: String, reason: &'static str },
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid repository name '{name}': {reason}")]
    InvalidRepositoryName { name: String, reason: String },

    #[error("invalid owner name '{name}': {reason}")]
    InvalidOwnerName { name: String, reason: String },

    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidEntryName {
        kind: &'static str,
        name: String,
        reason: String,
    },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        GithubError::from(err).into()
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        GithubError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
