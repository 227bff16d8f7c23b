//! Input validation for repokit operations.
//!
//! Names are checked before any request is sent.

use crate::error::{Result, ValidationError};

const MAX_REPOSITORY_NAME: usize = 100;
const MAX_OWNER_NAME: usize = 39;

/// Validate a repository name.
///
/// GitHub repository names:
/// - Only A-Z, a-z, 0-9, `-`, `_` and `.`
/// - At most 100 characters
/// - Cannot be `.` or `..`
///
/// # Errors
///
/// Returns `ValidationError::InvalidRepositoryName` if the name is rejected.
pub fn validate_repository_name(name: &str) -> Result<()> {
    let invalid = |reason: String| ValidationError::InvalidRepositoryName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("cannot be empty".to_string()).into());
    }

    if name.len() > MAX_REPOSITORY_NAME {
        return Err(invalid(format!("longer than {} characters", MAX_REPOSITORY_NAME)).into());
    }

    if name == "." || name == ".." {
        return Err(invalid("reserved name".to_string()).into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '_' | '.') {
            return Err(invalid(format!(
                "invalid character '{}' at position {}",
                ch,
                i + 1
            ))
            .into());
        }
    }

    Ok(())
}

/// Validate a user or organization login.
///
/// GitHub logins:
/// - Only A-Z, a-z, 0-9 and `-`
/// - Cannot start or end with `-`
/// - At most 39 characters
///
/// # Errors
///
/// Returns `ValidationError::InvalidOwnerName` if the name is rejected.
pub fn validate_owner_name(name: &str) -> Result<()> {
    let invalid = |reason: String| ValidationError::InvalidOwnerName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("cannot be empty".to_string()).into());
    }

    if name.len() > MAX_OWNER_NAME {
        return Err(invalid(format!("longer than {} characters", MAX_OWNER_NAME)).into());
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(invalid("cannot start or end with '-'".to_string()).into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '-' {
            return Err(invalid(format!(
                "invalid character '{}' at position {}",
                ch,
                i + 1
            ))
            .into());
        }
    }

    Ok(())
}

/// Validate both halves of `owner/repo`.
///
/// # Errors
///
/// Returns the first `ValidationError` found.
pub fn validate_full_name(owner: &str, repo: &str) -> Result<()> {
    validate_owner_name(owner)?;
    validate_repository_name(repo)
}

/// Validate an Actions secret or variable name.
///
/// Names must:
/// - Only contain A-Z, a-z, 0-9, and underscore
/// - Not start with a digit
/// - Not start with the reserved `GITHUB_` prefix
///
/// # Arguments
///
/// * `kind` - `"secret"` or `"variable"`, for error messages
/// * `name` - The name to validate
///
/// # Errors
///
/// Returns `ValidationError::InvalidEntryName` if the name is rejected.
pub fn validate_entry_name(kind: &'static str, name: &str) -> Result<()> {
    let invalid = |reason: String| ValidationError::InvalidEntryName {
        kind,
        name: name.to_string(),
        reason,
    };

    let Some(first) = name.chars().next() else {
        return Err(invalid("cannot be empty".to_string()).into());
    };

    if first.is_ascii_digit() {
        return Err(invalid("cannot start with a digit".to_string()).into());
    }

    if name.to_ascii_uppercase().starts_with("GITHUB_") {
        return Err(invalid("the GITHUB_ prefix is reserved".to_string()).into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid(format!(
                "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                ch,
                i + 1
            ))
            .into());
        }
    }

    Ok(())
}
