//! Rendering shared by the create and add-secrets workflows.

use crate::cli::output;
use crate::core::domain::{ItemResult, ProvisionReport};
use crate::core::github::GitHub;

/// Print one line per provisioned item.
pub fn report(report: &ProvisionReport) {
    output::section("Secrets");
    items(&report.secrets);
    output::section("Variables");
    items(&report.variables);
}

fn items(items: &[ItemResult]) {
    if items.is_empty() {
        output::dimmed("  none configured");
    }
    for item in items {
        match &item.outcome {
            Ok(outcome) => output::item_ok(&item.name, outcome, &item.detail),
            Err(e) => output::item_failed(&item.name, e),
        }
    }
}

/// Re-list secrets and variables and print their names.
///
/// Listing failures are reported and do not abort.
pub async fn configuration(client: &GitHub, owner: &str, repo: &str, title: &str) {
    output::section(title);

    match client.get_secrets(owner, repo).await {
        Ok(secrets) => output::kv(
            "Secrets:  ",
            output::names_or_none(secrets.iter().map(|s| s.name.as_str())),
        ),
        Err(e) => output::error(&format!("failed to fetch secrets: {}", e)),
    }

    match client.get_variables(owner, repo).await {
        Ok(variables) => output::kv(
            "Variables:",
            output::names_or_none(variables.iter().map(|v| v.name.as_str())),
        ),
        Err(e) => output::error(&format!("failed to fetch variables: {}", e)),
    }

    output::rule();
}
