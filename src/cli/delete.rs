//! Delete command - delete a repository after confirmation.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;

use crate::cli::{output, validate};
use crate::core::github::GitHub;
use crate::core::validation::validate_repository_name;
use crate::error::{Error, GithubError, Result};

/// Delete a repository.
///
/// Without an organization the repository is looked up under the
/// authenticated user's login.
pub async fn execute(client: &GitHub, repo: &str, org: Option<&str>) -> Result<()> {
    validate_repository_name(repo)?;

    let validation = validate::require_access(client, org).await?;
    let owner = match org {
        Some(org) => org.to_string(),
        None => validation.username.clone().ok_or_else(|| {
            GithubError::Authentication("token has no associated user".to_string())
        })?,
    };

    println!();
    output::warn(&format!(
        "you are about to delete {}",
        output::key(&format!("{}/{}", owner, repo))
    ));
    output::warn("this action cannot be undone!");
    if !confirm()? {
        output::hint("cancelled");
        return Ok(());
    }

    output::section("Deleting repository");
    output::kv("owner     ", &owner);
    output::kv("repository", repo);
    output::rule();

    if let Err(e) = client.delete_repository(&owner, repo).await {
        match &e {
            Error::Github(GithubError::NotFound { .. }) => {
                output::error("repository not found")
            }
            Error::Github(GithubError::Permission { .. }) => {
                output::error("permission denied")
            }
            _ => output::error("failed to delete repository"),
        }
        return Err(e);
    }

    output::success("repository deleted successfully");
    Ok(())
}

/// Block until the operator enters a line. Any line confirms; end of
/// input without a line cancels.
fn confirm() -> Result<bool> {
    if io::stdin().is_terminal() {
        let _: String = Input::new()
            .with_prompt("Press Ctrl+C to cancel, or Enter to continue")
            .allow_empty(true)
            .interact_text()?;
        return Ok(true);
    }

    output::hint("press Ctrl+C to cancel, or Enter to continue");
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    Ok(read > 0)
}
