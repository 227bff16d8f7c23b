//! Command helper methods for Test.

use super::{Test, TOKEN};
use assert_cmd::Command;

/// Variables the binary reads; cleared so the host environment never leaks in.
const CONTROLLED_ENV: &[&str] = &[
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
    "DEFAULT_ORG",
    "DEFAULT_TEMPLATE",
    "DIAWI_TOKEN",
    "KEYCHAIN_PASSWORD",
    "SLACK_TOKEN",
    "UNITY_EMAIL",
    "UNITY_PASSWORD",
    "UNITY_VERSION",
    "REPOKIT_LOG",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
    "http_proxy",
    "https_proxy",
    "all_proxy",
];

impl Test {
    /// Create a repokit command against the mock API.
    ///
    /// Returns a Command configured with:
    /// - GITHUB_TOKEN and GITHUB_API_URL pointing at the mock server
    /// - DEFAULT_ORG set to `acme`
    /// - colors disabled
    /// - current directory set to the test directory
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("GITHUB_TOKEN", TOKEN);
        cmd.env("DEFAULT_ORG", "acme");
        cmd
    }

    /// Like `cmd()` but without a token or default organization.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("repokit").expect("failed to find repokit binary");
        for var in CONTROLLED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("GITHUB_API_URL", self.server.uri());
        cmd.env("NO_PROXY", "127.0.0.1,localhost");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }
}
