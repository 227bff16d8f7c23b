//! Add-secrets command - provision the configured set on an existing repository.

use crate::cli::{output, summary};
use crate::core::config::Settings;
use crate::core::github::GitHub;
use crate::core::validation::validate_repository_name;
use crate::error::Result;

/// Create or update every configured secret and variable on `repo`.
///
/// Individual failures are reported and do not stop the remaining items.
pub async fn execute(
    client: &GitHub,
    settings: &Settings,
    repo: &str,
    org: Option<&str>,
) -> Result<()> {
    validate_repository_name(repo)?;

    let owner = match org {
        Some(org) => org.to_string(),
        None => client.authenticated_user().await?.login,
    };

    output::section("Managing secrets and variables");
    output::kv("repository", format!("{}/{}", owner, repo));
    output::rule();

    let report = client
        .provision(&owner, repo, &settings.secrets, &settings.variables)
        .await;
    summary::report(&report);

    summary::configuration(client, &owner, repo, "Current Configuration").await;

    let failures = report.failures();
    println!();
    if failures == 0 {
        output::success("operation completed successfully");
    } else {
        output::warn(&format!("operation completed with {} failed item(s)", failures));
    }

    Ok(())
}
