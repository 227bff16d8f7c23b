//! Repository endpoints.

use serde::Serialize;
use tracing::{debug, info};

use super::{GitHub, Target};
use crate::core::domain::{
    Environment, ProvisionReport, RepositoryRecord, SecretDescriptor, TemplateRef,
    TemplateSelector, VariableDescriptor,
};
use crate::core::validation::{
    validate_full_name, validate_owner_name, validate_repository_name,
};
use crate::error::Result;

/// Parameters for [`GitHub::create_repository`].
#[derive(Debug, Clone, Copy)]
pub struct CreateRepository<'a> {
    /// Organization to create in; `None` creates a personal repository.
    pub owner: Option<&'a str>,
    pub name: &'a str,
    pub private: bool,
    /// Ignored for personal repositories.
    pub template: &'a TemplateSelector,
    /// Provisioned after generating from a template.
    pub secrets: &'a [SecretDescriptor],
    /// Provisioned after generating from a template.
    pub variables: &'a [VariableDescriptor],
}

/// A newly created repository.
#[derive(Debug)]
pub struct CreatedRepository {
    pub repository: RepositoryRecord,
    /// Present only when generated from a template.
    pub provisioned: Option<ProvisionReport>,
}

#[derive(Serialize)]
struct NewRepository<'a> {
    name: &'a str,
    private: bool,
    auto_init: bool,
}

#[derive(Serialize)]
struct GenerateRepository<'a> {
    owner: &'a str,
    name: &'a str,
    description: String,
    private: bool,
    include_all_branches: bool,
}

impl GitHub {
    /// Fetch a repository.
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryRecord> {
        validate_full_name(owner, repo)?;
        let target = Target::new("read", format!("repository {}/{}", owner, repo), "repo");
        self.get_json(&format!("/repos/{}/{}", owner, repo), &target)
            .await
    }

    /// Confirm a template repository exists.
    ///
    /// # Errors
    ///
    /// Returns `GithubError::NotFound` naming the template when it is missing.
    pub async fn get_template(&self, template: &TemplateRef) -> Result<RepositoryRecord> {
        validate_full_name(&template.owner, &template.repo)?;
        let target = Target::new("read", format!("template repository {}", template), "repo");
        self.get_json(&format!("/repos/{}/{}", template.owner, template.repo), &target)
            .await
    }

    /// Create a repository.
    ///
    /// Three paths, chosen by the request:
    /// - no owner: personal repository, auto-initialized
    /// - owner and template: verify the template, generate from it with all
    ///   branches, then provision the configured secrets and variables
    /// - owner without template: empty organization repository, auto-initialized
    ///
    /// # Errors
    ///
    /// Returns `GithubError::NotFound` if the template does not exist, in which
    /// case nothing is created.
    pub async fn create_repository(
        &self,
        request: &CreateRepository<'_>,
    ) -> Result<CreatedRepository> {
        validate_repository_name(request.name)?;

        let Some(owner) = request.owner else {
            info!(name = request.name, "creating personal repository");
            let target = Target::new("create", format!("repository {}", request.name), "repo");
            let body = NewRepository {
                name: request.name,
                private: request.private,
                auto_init: true,
            };
            let repository = self
                .send(self.http.post(self.url("/user/repos")).json(&body), &target)
                .await?
                .json()
                .await?;
            return Ok(CreatedRepository {
                repository,
                provisioned: None,
            });
        };

        validate_owner_name(owner)?;

        let target = Target::new(
            "create",
            format!("repository {}/{}", owner, request.name),
            "repo",
        );

        let Some(template) = request.template.resolve(owner) else {
            info!(owner, name = request.name, "creating empty organization repository");
            let body = NewRepository {
                name: request.name,
                private: request.private,
                auto_init: true,
            };
            let repository = self
                .send(
                    self.http
                        .post(self.url(&format!("/orgs/{}/repos", owner)))
                        .json(&body),
                    &target,
                )
                .await?
                .json()
                .await?;
            return Ok(CreatedRepository {
                repository,
                provisioned: None,
            });
        };

        self.get_template(&template).await?;

        info!(owner, name = request.name, %template, "generating repository from template");
        let body = GenerateRepository {
            owner,
            name: request.name,
            description: format!("Created from template: {}", template),
            private: request.private,
            include_all_branches: true,
        };
        let repository: RepositoryRecord = self
            .send(
                self.http
                    .post(self.url(&format!(
                        "/repos/{}/{}/generate",
                        template.owner, template.repo
                    )))
                    .json(&body),
                &target,
            )
            .await?
            .json()
            .await?;

        let report = self
            .provision(owner, request.name, request.secrets, request.variables)
            .await;

        Ok(CreatedRepository {
            repository,
            provisioned: Some(report),
        })
    }

    /// Delete a repository.
    ///
    /// # Errors
    ///
    /// Returns `GithubError::NotFound` if it does not exist, or
    /// `GithubError::Permission` (suggesting `delete_repo`) if forbidden.
    pub async fn delete_repository(&self, owner: &str, name: &str) -> Result<()> {
        validate_full_name(owner, name)?;
        info!(owner, name, "deleting repository");

        let target = Target::new("delete", format!("repository {}/{}", owner, name), "delete_repo");
        self.send(
            self.http.delete(self.url(&format!("/repos/{}/{}", owner, name))),
            &target,
        )
        .await?;
        Ok(())
    }

    /// List repositories of an organization, or of the authenticated user.
    ///
    /// Includes every visibility and every relationship (owned, member, fork).
    pub async fn list_repositories(&self, org: Option<&str>) -> Result<Vec<RepositoryRecord>> {
        if let Some(org) = org {
            validate_owner_name(org)?;
        }

        let (path, target) = match org {
            Some(org) => (
                format!("/orgs/{}/repos", org),
                Target::new("list", format!("repositories of {}", org), "repo"),
            ),
            None => (
                "/user/repos".to_string(),
                Target::new("list", "repositories of the authenticated user", "repo"),
            ),
        };

        let repos = self
            .get_array_paged(&path, &[("type", "all")], &target)
            .await?;
        debug!(count = repos.len(), "listed repositories");
        Ok(repos)
    }

    /// List deployment environments of a repository.
    pub async fn list_environments(&self, owner: &str, repo: &str) -> Result<Vec<Environment>> {
        validate_full_name(owner, repo)?;
        let target = Target::new("list", format!("environments of {}/{}", owner, repo), "repo");
        self.get_paged(&format!("/repos/{}/{}/environments", owner, repo), &target)
            .await
    }
}
