//! List command - list repositories with their visibility.

use crate::cli::output;
use crate::core::github::GitHub;
use crate::error::Result;

/// List repositories of an organization, or of the authenticated user.
pub async fn execute(client: &GitHub, org: Option<&str>, json: bool) -> Result<()> {
    let repos = client.list_repositories(org).await?;

    if json {
        let result = serde_json::json!({
            "repositories": repos,
            "count": repos.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match org {
        Some(org) => output::section(&format!("Repositories of {}", org)),
        None => output::section("Your repositories"),
    }

    if repos.is_empty() {
        output::warn("no repositories found");
        return Ok(());
    }

    for repo in &repos {
        output::list_item(&format!("{} ({})", repo.name, repo.visibility()));
    }
    output::dimmed(&format!("{} repositories", repos.len()));

    Ok(())
}
