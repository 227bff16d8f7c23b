//! Create command - create a repository and report its configuration.

use tracing::info;

use crate::cli::{output, summary, validate};
use crate::core::config::Settings;
use crate::core::domain::TemplateSelector;
use crate::core::github::{CreateRepository, GitHub};
use crate::core::validation::validate_repository_name;
use crate::error::Result;

/// Create a repository.
///
/// Aborts before creating anything if the token, the organization, or the
/// template repository is unusable.
pub async fn execute(
    client: &GitHub,
    settings: &Settings,
    repo: &str,
    org: Option<&str>,
    template: Option<String>,
    private: bool,
) -> Result<()> {
    validate_repository_name(repo)?;

    let template = match template {
        Some(selector) => TemplateSelector::parse(&selector)?,
        None => settings.default_template.clone(),
    };

    validate::require_access(client, org).await?;

    output::section("Creating new repository");
    output::kv("organization", org.unwrap_or("(personal account)"));
    output::kv("repository  ", repo);

    match org.and_then(|owner| template.resolve(owner)) {
        Some(template_ref) => {
            output::kv("template    ", &template_ref);
            client.get_template(&template_ref).await?;
        }
        None if template.is_none() => {
            output::kv("template    ", "none (creating empty repository)");
        }
        None => output::kv("template    ", "ignored for personal repositories"),
    }
    output::rule();

    let created = client
        .create_repository(&CreateRepository {
            owner: org,
            name: repo,
            private,
            template: &template,
            secrets: &settings.secrets,
            variables: &settings.variables,
        })
        .await?;

    info!(repository = %created.repository.full_name, "repository created");

    if let Some(report) = &created.provisioned {
        output::success("repository created from template");
        summary::report(report);
    } else {
        output::success("repository created");
    }

    let owner = created.repository.owner.login.as_str();
    let name = created.repository.name.as_str();

    output::section("Environments");
    match client.list_environments(owner, name).await {
        Ok(environments) if environments.is_empty() => output::warn("no environments found"),
        Ok(environments) => {
            for environment in &environments {
                output::success(&format!("{:<20} [configured]", environment.name));
            }
        }
        Err(e) => output::error(&format!("failed to fetch environments: {}", e)),
    }

    summary::configuration(client, owner, name, "Configuration Summary").await;

    println!();
    output::success(&format!(
        "repository created: {}",
        output::key(&created.repository.html_url)
    ));

    Ok(())
}
