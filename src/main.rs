//! repokit - provision GitHub repositories with Actions secrets and variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use repokit::cli::{completions, execute, output, Cli, Command};
use repokit::core::config::Settings;
use repokit::core::constants::LOG_ENV;
use repokit::error::{ConfigError, Error, GithubError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1; --help and --version exit 0.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("repokit=debug")
        } else {
            EnvFilter::new("repokit=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        // Needs no configuration.
        Command::Completions { shell } => completions::execute(shell),
        command => Settings::from_env().and_then(|settings| execute(command, &settings)),
    };

    if let Err(e) = result {
        // Each failed check was already printed where it was found.
        if matches!(e, Error::TokenInvalid(_)) {
            std::process::exit(1);
        }

        let suggestion = match &e {
            Error::Config(ConfigError::MissingToken) => {
                Some("set GITHUB_TOKEN in your environment or in .env".to_string())
            }
            Error::Config(ConfigError::InvalidTemplate { .. }) => {
                Some("use none, <repo>, or <owner>/<repo>".to_string())
            }
            Error::Github(GithubError::Permission { scope, .. }) => {
                Some(format!("make sure your token has the {} scope", scope))
            }
            Error::Github(GithubError::Authentication(_)) => {
                Some("run: repokit validate".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
