//! Tests for `repokit create`.

use crate::support::*;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, path_regex};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_from_template_end_to_end() {
    let t = Test::new().await;
    let key = RepoKey::generate();
    mount_authorized(&t.server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/base-template"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(repo_json("acme", "base-template", true)),
        )
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/base-template/generate"))
        .and(body_partial_json(json!({
            "owner": "acme",
            "name": "demo",
            "private": true,
            "include_all_branches": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(repo_json("acme", "demo", true)))
        .expect(1)
        .mount(&t.server)
        .await;

    // Empty while the five secrets are written, populated for the summary.
    Mock::given(method("GET"))
        .and(path("/repos/acme/demo/actions/secrets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(secrets_json(&[])))
        .up_to_n_times(5)
        .mount(&t.server)
        .await;
    mount_secret_list(&t.server, "acme", "demo", SECRET_NAMES).await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/demo/actions/variables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(variables_json(&[])))
        .up_to_n_times(1)
        .mount(&t.server)
        .await;
    mount_variable_list(&t.server, "acme", "demo", &[("UNITY_VERSION", "2022.3.50f1")]).await;

    mount_public_key(&t.server, "acme", "demo", &key).await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/actions/variables"))
        .and(body_json(json!({ "name": "UNITY_VERSION", "value": "2022.3.50f1" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&t.server)
        .await;
    mount_writes(&t.server, "acme", "demo").await;
    mount_environments(&t.server, "acme", "demo", &["staging", "production"]).await;

    let output = t
        .cmd()
        .env("DEFAULT_TEMPLATE", "base-template")
        .env("SLACK_TOKEN", "xoxb-test")
        .env("UNITY_EMAIL", "ci@example.com")
        .args(["create", "demo"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "acme/base-template");
    assert_stdout_contains(&output, "repository created from template");
    assert_stdout_contains(&output, "[created] (has value)");
    assert_stdout_contains(&output, "[created] (empty)");
    assert_stdout_contains(&output, "[created] (2022.3.50f1)");
    assert_stdout_contains(&output, "staging");
    assert_stdout_contains(&output, "production");
    assert_stdout_contains(
        &output,
        "Secrets:    DIAWI_TOKEN, KEYCHAIN_PASSWORD, SLACK_TOKEN, UNITY_EMAIL, UNITY_PASSWORD",
    );
    assert_stdout_contains(&output, "Variables:  UNITY_VERSION");
    assert_stdout_contains(&output, "repository created: https://github.com/acme/demo");
    assert_stdout_excludes(&output, "xoxb-test");

    let writes = sealed_writes(&t.server).await;
    assert_eq!(writes.len(), 5);
    for write in &writes {
        let expected = match write.name.as_str() {
            "SLACK_TOKEN" => "xoxb-test",
            "UNITY_EMAIL" => "ci@example.com",
            _ => "",
        };
        assert_eq!(key.unseal(&write.encrypted_value), expected, "secret {}", write.name);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_without_template() {
    let t = Test::new().await;
    mount_authorized(&t.server, "acme").await;

    Mock::given(method("POST"))
        .and(path("/orgs/acme/repos"))
        .and(body_json(json!({ "name": "demo", "private": true, "auto_init": true })))
        .respond_with(ResponseTemplate::new(201).set_body_json(repo_json("acme", "demo", true)))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(path_regex("/generate$"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&t.server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&t.server)
        .await;
    Mock::given(path("/repos/acme/demo/actions/secrets/public-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&t.server)
        .await;
    mount_secret_list(&t.server, "acme", "demo", &[]).await;
    mount_variable_list(&t.server, "acme", "demo", &[]).await;
    mount_environments(&t.server, "acme", "demo", &[]).await;

    let output = t
        .cmd()
        .env("DEFAULT_TEMPLATE", "base-template")
        .args(["create", "demo", "--template", "none"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "none (creating empty repository)");
    assert_stdout_contains(&output, "no environments found");
    assert_stdout_contains(&output, "Secrets:    none");
    assert_stdout_contains(&output, "Variables:  none");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_public_in_explicit_org() {
    let t = Test::new().await;
    mount_authorized(&t.server, "other").await;

    Mock::given(method("POST"))
        .and(path("/orgs/other/repos"))
        .and(body_partial_json(json!({ "name": "site", "private": false })))
        .respond_with(ResponseTemplate::new(201).set_body_json(repo_json("other", "site", false)))
        .expect(1)
        .mount(&t.server)
        .await;
    mount_secret_list(&t.server, "other", "site", &[]).await;
    mount_variable_list(&t.server, "other", "site", &[]).await;
    mount_environments(&t.server, "other", "site", &[]).await;

    let output = t
        .cmd()
        .args(["create", "site", "other", "--public"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "repository created: https://github.com/other/site");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_with_missing_template_creates_nothing() {
    let t = Test::new().await;
    mount_authorized(&t.server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&t.server)
        .await;

    let output = t
        .cmd()
        .args(["create", "demo", "--template", "missing"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "template repository acme/missing not found");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_without_org_access_aborts() {
    let t = Test::new().await;
    mount_user(&t.server, "octocat", ALL_SCOPES).await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&t.server)
        .await;

    let output = t.cmd().args(["create", "demo"]).output().unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "access organization acme");
    assert_stdout_contains(&output, "admin:org");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_with_missing_scopes_warns_and_continues() {
    let t = Test::new().await;
    mount_user(&t.server, "octocat", "repo").await;
    mount_org(&t.server, "acme").await;
    Mock::given(method("POST"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(201).set_body_json(repo_json("acme", "demo", true)))
        .expect(1)
        .mount(&t.server)
        .await;
    mount_secret_list(&t.server, "acme", "demo", &[]).await;
    mount_variable_list(&t.server, "acme", "demo", &[]).await;
    mount_environments(&t.server, "acme", "demo", &[]).await;

    let output = t.cmd().args(["create", "demo"]).output().unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "⚠ missing required scopes: workflow, admin:org");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_reports_name_conflict() {
    let t = Test::new().await;
    mount_authorized(&t.server, "acme").await;
    Mock::given(method("POST"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Repository creation failed."
        })))
        .mount(&t.server)
        .await;

    let output = t.cmd().args(["create", "demo"]).output().unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "422");
}
