//! Command-line interface.
//!
//! Each command is one provisioning workflow: a flat sequence of client
//! calls with progress rendered through [`output`].

pub mod completions;
pub mod create;
pub mod delete;
pub mod list;
pub mod output;
pub mod secrets;
pub mod summary;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::github::GitHub;
use crate::core::validation::validate_owner_name;
use crate::error::Result;

/// repokit - provision GitHub repositories with Actions secrets and variables.
#[derive(Parser)]
#[command(
    name = "repokit",
    about = "Provision GitHub repositories from templates with Actions secrets and variables",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a repository, from a template when one is configured
    Create {
        /// Repository name
        repo: String,
        /// Organization (defaults to DEFAULT_ORG, then your personal account)
        org: Option<String>,
        /// Template: `none`, `repo`, or `owner/repo` (defaults to DEFAULT_TEMPLATE)
        #[arg(short, long)]
        template: Option<String>,
        /// Create a public repository instead of a private one
        #[arg(long)]
        public: bool,
    },

    /// Delete a repository after confirmation
    Delete {
        /// Repository name
        repo: String,
        /// Organization (defaults to DEFAULT_ORG, then your personal account)
        org: Option<String>,
    },

    /// List repositories
    List {
        /// Organization (defaults to DEFAULT_ORG, then your personal account)
        org: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the token's scopes and organization access
    Validate {
        /// Organization (defaults to DEFAULT_ORG)
        org: Option<String>,
    },

    /// Create or update the configured secrets and variables on a repository
    AddSecrets {
        /// Repository name
        repo: String,
        /// Organization (defaults to DEFAULT_ORG, then your personal account)
        org: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
///
/// Workflows run on a current-thread runtime; every step awaits one
/// request before starting the next.
///
/// # Errors
///
/// Returns the first error that aborts the workflow.
pub fn execute(command: Command, settings: &Settings) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(dispatch(command, settings))
}

async fn dispatch(command: Command, settings: &Settings) -> Result<()> {
    use Command::*;

    let client = || GitHub::from_settings(settings);

    match command {
        Create {
            repo,
            org,
            template,
            public,
        } => {
            let org = resolve_org(settings, org)?;
            create::execute(&client()?, settings, &repo, org.as_deref(), template, !public).await
        }
        Delete { repo, org } => {
            let org = resolve_org(settings, org)?;
            delete::execute(&client()?, &repo, org.as_deref()).await
        }
        List { org, json } => {
            let org = resolve_org(settings, org)?;
            list::execute(&client()?, org.as_deref(), json).await
        }
        Validate { org } => {
            let org = resolve_org(settings, org)?;
            validate::execute(&client()?, org.as_deref()).await
        }
        AddSecrets { repo, org } => {
            let org = resolve_org(settings, org)?;
            secrets::execute(&client()?, settings, &repo, org.as_deref()).await
        }
        Completions { shell } => completions::execute(shell),
    }
}

/// Command-line organization, falling back to `DEFAULT_ORG`, checked
/// before any request is built from it.
fn resolve_org(settings: &Settings, org: Option<String>) -> Result<Option<String>> {
    let org = settings.org(org);
    if let Some(org) = &org {
        validate_owner_name(org)?;
    }
    Ok(org)
}
