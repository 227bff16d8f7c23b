//! Actions secrets and variables.
//!
//! Upserts always list the current entries right before writing. Nothing is
//! cached between calls, and the public key is fetched again for every
//! secret because the server may rotate it.

use serde::Serialize;
use tracing::debug;

use super::{GitHub, Target};
use crate::core::crypto;
use crate::core::domain::{
    ItemResult, ProvisionReport, RepositoryPublicKey, SecretDescriptor, SecretEntry,
    UpsertOutcome, Variable, VariableDescriptor,
};
use crate::core::validation::{validate_entry_name, validate_full_name};
use crate::error::Result;

#[derive(Serialize)]
struct SealedSecret<'a> {
    encrypted_value: &'a str,
    key_id: &'a str,
}

#[derive(Serialize)]
struct VariableBody<'a> {
    name: &'a str,
    value: &'a str,
}

impl GitHub {
    /// List secret names of a repository.
    pub async fn get_secrets(&self, owner: &str, repo: &str) -> Result<Vec<SecretEntry>> {
        validate_full_name(owner, repo)?;
        let target = Target::new("list", format!("secrets of {}/{}", owner, repo), "repo");
        self.get_paged(&format!("/repos/{}/{}/actions/secrets", owner, repo), &target)
            .await
    }

    /// List variables of a repository.
    pub async fn get_variables(&self, owner: &str, repo: &str) -> Result<Vec<Variable>> {
        validate_full_name(owner, repo)?;
        let target = Target::new("list", format!("variables of {}/{}", owner, repo), "repo");
        self.get_paged(&format!("/repos/{}/{}/actions/variables", owner, repo), &target)
            .await
    }

    /// Fetch the key secrets must currently be sealed against.
    pub async fn get_public_key(&self, owner: &str, repo: &str) -> Result<RepositoryPublicKey> {
        validate_full_name(owner, repo)?;
        let target = Target::new("read", format!("public key of {}/{}", owner, repo), "repo");
        self.get_json(
            &format!("/repos/{}/{}/actions/secrets/public-key", owner, repo),
            &target,
        )
        .await
    }

    /// Create or update a secret, sealing `value` first.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError` if the repository key is malformed, or a
    /// `GithubError` from any of the three calls.
    pub async fn create_or_update_secret(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        value: &str,
    ) -> Result<UpsertOutcome> {
        validate_full_name(owner, repo)?;
        validate_entry_name("secret", name)?;

        let exists = self
            .get_secrets(owner, repo)
            .await?
            .iter()
            .any(|s| s.name == name);

        let key = self.get_public_key(owner, repo).await?;
        let encrypted_value = crypto::seal(value, &key.key)?;

        debug!(owner, repo, name, key_id = %key.key_id, exists, "writing secret");

        let target = Target::new("write", format!("secret {} on {}/{}", name, owner, repo), "repo");
        let body = SealedSecret {
            encrypted_value: &encrypted_value,
            key_id: &key.key_id,
        };
        self.send(
            self.http
                .put(self.url(&format!(
                    "/repos/{}/{}/actions/secrets/{}",
                    owner, repo, name
                )))
                .json(&body),
            &target,
        )
        .await?;

        Ok(UpsertOutcome::from_existing(exists))
    }

    /// Create or update a variable.
    ///
    /// Unlike secrets, variables have separate create (`POST`) and update
    /// (`PATCH`) endpoints.
    pub async fn create_or_update_variable(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        value: &str,
    ) -> Result<UpsertOutcome> {
        validate_full_name(owner, repo)?;
        validate_entry_name("variable", name)?;

        let exists = self
            .get_variables(owner, repo)
            .await?
            .iter()
            .any(|v| v.name == name);

        debug!(owner, repo, name, exists, "writing variable");

        let target = Target::new(
            "write",
            format!("variable {} on {}/{}", name, owner, repo),
            "repo",
        );
        let body = VariableBody { name, value };
        let request = if exists {
            self.http.patch(self.url(&format!(
                "/repos/{}/{}/actions/variables/{}",
                owner, repo, name
            )))
        } else {
            self.http
                .post(self.url(&format!("/repos/{}/{}/actions/variables", owner, repo)))
        };
        self.send(request.json(&body), &target).await?;

        Ok(UpsertOutcome::from_existing(exists))
    }

    /// Upsert every configured secret, then every configured variable.
    ///
    /// Sequential and in order. A failing item is recorded in the report and
    /// the remaining items are still attempted.
    pub async fn provision(
        &self,
        owner: &str,
        repo: &str,
        secrets: &[SecretDescriptor],
        variables: &[VariableDescriptor],
    ) -> ProvisionReport {
        let mut report = ProvisionReport::default();

        for secret in secrets {
            let outcome = self
                .create_or_update_secret(owner, repo, &secret.name, &secret.value)
                .await;
            if let Err(e) = &outcome {
                debug!(name = %secret.name, error = %e, "secret not provisioned");
            }
            report.secrets.push(ItemResult {
                name: secret.name.clone(),
                detail: if secret.value.is_empty() {
                    "empty".to_string()
                } else {
                    "has value".to_string()
                },
                outcome,
            });
        }

        for variable in variables {
            let outcome = self
                .create_or_update_variable(owner, repo, &variable.name, &variable.value)
                .await;
            if let Err(e) = &outcome {
                debug!(name = %variable.name, error = %e, "variable not provisioned");
            }
            report.variables.push(ItemResult {
                name: variable.name.clone(),
                detail: if variable.value.is_empty() {
                    "empty".to_string()
                } else {
                    variable.value.clone()
                },
                outcome,
            });
        }

        report
    }
}
