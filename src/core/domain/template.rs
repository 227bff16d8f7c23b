//! Template repository selection.

use std::fmt;
use std::str::FromStr;

use crate::core::constants::NO_TEMPLATE;
use crate::core::validation::{validate_owner_name, validate_repository_name};
use crate::error::ConfigError;

/// Which template a new repository is generated from.
///
/// Parsed from `none`, `repo`, or `owner/repo`. A bare name is owned by
/// the organization the repository is created in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSelector {
    #[default]
    None,
    Bare(String),
    Qualified { owner: String, repo: String },
}

/// A fully resolved template repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl TemplateSelector {
    /// Parse a selector string. Empty input means no template.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if value.is_empty() || value == NO_TEMPLATE {
            return Ok(Self::None);
        }

        let invalid = |reason| ConfigError::InvalidTemplate {
            value: value.to_string(),
            reason,
        };

        match value.split_once('/') {
            None => {
                if validate_repository_name(value).is_err() {
                    return Err(invalid("invalid repository name"));
                }
                Ok(Self::Bare(value.to_string()))
            }
            Some((owner, repo)) => {
                if owner.is_empty() || repo.is_empty() {
                    return Err(invalid("expected owner/repo"));
                }
                if repo.contains('/') {
                    return Err(invalid("too many path segments"));
                }
                if validate_owner_name(owner).is_err() {
                    return Err(invalid("invalid owner name"));
                }
                if validate_repository_name(repo).is_err() {
                    return Err(invalid("invalid repository name"));
                }
                Ok(Self::Qualified {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Resolve against the owner of the repository being created.
    pub fn resolve(&self, default_owner: &str) -> Option<TemplateRef> {
        match self {
            Self::None => None,
            Self::Bare(repo) => Some(TemplateRef {
                owner: default_owner.to_string(),
                repo: repo.clone(),
            }),
            Self::Qualified { owner, repo } => Some(TemplateRef {
                owner: owner.clone(),
                repo: repo.clone(),
            }),
        }
    }
}

impl FromStr for TemplateSelector {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
