//! Mounts for the GitHub endpoints most tests need.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{environments_json, secrets_json, variables_json, RepoKey};

/// `GET /user` answering as `login` with the given scopes header.
pub async fn mount_user(server: &MockServer, login: &str, scopes: &str) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-OAuth-Scopes", scopes)
                .set_body_json(json!({ "login": login, "id": 7 })),
        )
        .mount(server)
        .await;
}

/// `GET /user` rejecting the token.
pub async fn mount_bad_credentials(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials"
        })))
        .mount(server)
        .await;
}

/// `GET /orgs/{org}` succeeding.
pub async fn mount_org(server: &MockServer, org: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/orgs/{}", org)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": org })))
        .mount(server)
        .await;
}

/// A user with every required scope who can see `org`.
pub async fn mount_authorized(server: &MockServer, org: &str) {
    mount_user(server, "octocat", super::ALL_SCOPES).await;
    mount_org(server, org).await;
}

/// `GET .../actions/secrets/public-key` serving `key`.
pub async fn mount_public_key(server: &MockServer, owner: &str, repo: &str, key: &RepoKey) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/{}/{}/actions/secrets/public-key",
            owner, repo
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key_id": "568250167242549743",
            "key": key.public
        })))
        .mount(server)
        .await;
}

/// `GET .../actions/secrets` listing `names`.
pub async fn mount_secret_list(server: &MockServer, owner: &str, repo: &str, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/actions/secrets", owner, repo)))
        .respond_with(ResponseTemplate::new(200).set_body_json(secrets_json(names)))
        .mount(server)
        .await;
}

/// `GET .../actions/variables` listing `vars`.
pub async fn mount_variable_list(
    server: &MockServer,
    owner: &str,
    repo: &str,
    vars: &[(&str, &str)],
) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/actions/variables", owner, repo)))
        .respond_with(ResponseTemplate::new(200).set_body_json(variables_json(vars)))
        .mount(server)
        .await;
}

/// `GET .../environments` listing `names`.
pub async fn mount_environments(server: &MockServer, owner: &str, repo: &str, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/environments", owner, repo)))
        .respond_with(ResponseTemplate::new(200).set_body_json(environments_json(names)))
        .mount(server)
        .await;
}

/// Accept every secret write and variable create on a repository.
pub async fn mount_writes(server: &MockServer, owner: &str, repo: &str) {
    Mock::given(method("PUT"))
        .and(wiremock::matchers::path_regex(format!(
            "^/repos/{}/{}/actions/secrets/[A-Z0-9_]+$",
            owner, repo
        )))
        .respond_with(ResponseTemplate::new(201))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/repos/{}/{}/actions/variables", owner, repo)))
        .respond_with(ResponseTemplate::new(201))
        .mount(server)
        .await;
}

/// A secret write as received by the mock API.
#[derive(Debug)]
pub struct SealedWrite {
    pub name: String,
    pub key_id: String,
    pub encrypted_value: String,
}

/// Every secret write received, in arrival order.
pub async fn sealed_writes(server: &MockServer) -> Vec<SealedWrite> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == "PUT" && r.url.path().contains("/actions/secrets/"))
        .map(|r| {
            let name = r
                .url
                .path()
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string();
            let body: serde_json::Value = r.body_json().expect("secret body is not json");
            let field = |key: &str| {
                body[key]
                    .as_str()
                    .unwrap_or_else(|| panic!("missing {}", key))
                    .to_string()
            };
            SealedWrite {
                name,
                key_id: field("key_id"),
                encrypted_value: field("encrypted_value"),
            }
        })
        .collect()
}
