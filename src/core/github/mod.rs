//! GitHub REST client.
//!
//! [`GitHub`] owns the authenticated HTTP session. Every method issues one or
//! more requests and maps failures into [`GithubError`] in [`GitHub::send`],
//! so callers never look at status codes.
//!
//! Endpoints are grouped by resource:
//! - `users`: authentication, token validation, organizations
//! - `repos`: repository create/delete/list, environments
//! - `actions`: secrets, variables, and provisioning

mod actions;
mod repos;
mod users;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::Settings;
use crate::core::constants::{API_VERSION, PER_PAGE};
use crate::error::{GithubError, Result};

pub use repos::{CreateRepository, CreatedRepository};
pub use users::AuthenticatedUser;

/// Authenticated GitHub API session.
#[derive(Debug, Clone)]
pub struct GitHub {
    http: Client,
    base_url: String,
}

/// What a request acts on, used to build error messages.
#[derive(Debug)]
pub(crate) struct Target {
    /// e.g. `"repository acme/demo"`
    resource: String,
    /// e.g. `"delete"`
    action: &'static str,
    /// Scope to suggest when the call is forbidden.
    scope: &'static str,
}

impl Target {
    pub(crate) fn new(action: &'static str, resource: impl Into<String>, scope: &'static str) -> Self {
        Self {
            resource: resource.into(),
            action,
            scope,
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// A listing page wrapped in `{"total_count": n, "<items>": [...]}`.
#[derive(Debug, Deserialize)]
struct Page<T> {
    total_count: usize,
    #[serde(alias = "secrets", alias = "variables", alias = "environments")]
    items: Vec<T>,
}

impl GitHub {
    /// Create a client for `base_url` authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns `GithubError::Authentication` if the token cannot be used as a
    /// header value, or `GithubError::Transport` if the client fails to build.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        let bearer = Zeroizing::new(format!("Bearer {}", token.trim()));
        let mut auth = HeaderValue::from_str(&bearer).map_err(|_| {
            GithubError::Authentication("token contains invalid characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("repokit/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` if no token is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.token()?, &settings.api_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, mapping non-success statuses to `GithubError`.
    async fn send(&self, request: RequestBuilder, target: &Target) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();

        debug!(
            status = status.as_u16(),
            action = target.action,
            resource = %target.resource,
            "github response"
        );

        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ApiMessage>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        Err(map_status(status, message, target).into())
    }

    /// GET and decode a JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, target: &Target) -> Result<T> {
        debug!(path, "GET");
        let response = self.send(self.http.get(self.url(path)), target).await?;
        Ok(response.json().await?)
    }

    /// GET every page of a `total_count`-wrapped listing.
    async fn get_paged<T: DeserializeOwned>(&self, path: &str, target: &Target) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1usize;

        loop {
            debug!(path, page, "GET page");
            let request = self
                .http
                .get(self.url(path))
                .query(&[("per_page", PER_PAGE), ("page", page)]);
            let body: Page<T> = self.send(request, target).await?.json().await?;

            let fetched = body.items.len();
            items.extend(body.items);

            if fetched == 0 || items.len() >= body.total_count {
                break;
            }
            page += 1;
        }

        Ok(items)
    }

    /// GET every page of a bare-array listing.
    async fn get_array_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        target: &Target,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1usize;

        loop {
            debug!(path, page, "GET page");
            let request = self
                .http
                .get(self.url(path))
                .query(query)
                .query(&[("per_page", PER_PAGE), ("page", page)]);
            let body: Vec<T> = self.send(request, target).await?.json().await?;

            let fetched = body.len();
            items.extend(body);

            if fetched < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

/// Map an unsuccessful status to the error taxonomy.
fn map_status(status: StatusCode, message: String, target: &Target) -> GithubError {
    match status {
        StatusCode::UNAUTHORIZED => GithubError::Authentication(message),
        StatusCode::FORBIDDEN => GithubError::Permission {
            action: format!("{} {} ({})", target.action, target.resource, message),
            scope: target.scope,
        },
        StatusCode::NOT_FOUND => GithubError::NotFound {
            resource: target.resource.clone(),
        },
        _ => GithubError::Transport(format!(
            "{} {} returned {}: {}",
            target.action,
            target.resource,
            status.as_u16(),
            message
        )),
    }
}
