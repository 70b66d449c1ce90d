use crate::harness::{ChatApi, TestContext};
use predicates::prelude::*;
use std::fs;

const README: &str = "Install:\n  pip install widget";
const SCRIPT: &str = "#!/bin/bash\necho \"installed widget\" > marker.txt\n";
const HTML: &str = "<h1>Installation</h1>\n<ol><li>Exécutez le script</li></ol>\n";

#[test]
fn full_run_writes_executes_and_translates() {
    let ctx = TestContext::new();
    let url = ctx.remote_repository("widget", &[("README.md", README), ("README", "older")]);
    let mut api = ChatApi::start();
    let install = api.install_reply(&ChatApi::completion_body(Some(SCRIPT)));
    let instructions = api.instructions_reply("French", &ChatApi::completion_body(Some(HTML)));

    ctx.cli()
        .args(["--url", &url, "--language", "French", "--no-open", "--api-url", &api.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("simplified_instructions.html"));

    install.assert();
    instructions.assert();

    assert!(ctx.work_dir().join("widget").join("README.md").exists());
    assert_eq!(fs::read(ctx.install_script_path()).unwrap(), SCRIPT.as_bytes());
    assert_eq!(fs::read(ctx.instructions_path()).unwrap(), HTML.as_bytes());
    assert_eq!(
        fs::read_to_string(ctx.work_dir().join("marker.txt")).unwrap(),
        "installed widget\n"
    );

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(ctx.install_script_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}

#[test]
fn answers_can_be_piped_on_stdin() {
    let ctx = TestContext::new();
    let url = ctx.remote_repository("widget", &[("docs/Readme.rst", README)]);
    let mut api = ChatApi::start();
    let _install = api.install_reply(&ChatApi::completion_body(Some("true\n")));
    let instructions = api.instructions_reply("Japanese", &ChatApi::completion_body(Some(HTML)));

    ctx.cli()
        .args(["--no-open", "--api-url", &api.url()])
        .write_stdin(format!("{}\nJapanese\n", url))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the language"));

    instructions.assert();
    assert_eq!(fs::read_to_string(ctx.instructions_path()).unwrap(), HTML);
}

#[test]
fn null_completion_prints_raw_reply_and_writes_nothing() {
    let ctx = TestContext::new();
    let url = ctx.remote_repository("widget", &[("README.md", README)]);
    let mut api = ChatApi::start();
    let body = ChatApi::completion_body(None);
    let _install = api.install_reply(&body);

    ctx.cli()
        .args(["--url", &url, "--language", "French", "--no-open", "--api-url", &api.url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No content generated"))
        .stderr(predicate::str::contains(body.as_str()));

    assert!(!ctx.install_script_path().exists());
    assert!(!ctx.instructions_path().exists());
}

#[test]
fn failing_install_script_still_produces_instructions() {
    let ctx = TestContext::new();
    let url = ctx.remote_repository("widget", &[("README.md", README)]);
    let mut api = ChatApi::start();
    let _install = api.install_reply(&ChatApi::completion_body(Some("exit 7\n")));
    let _instructions = api.instructions_reply("French", &ChatApi::completion_body(Some(HTML)));

    ctx.cli()
        .args(["--url", &url, "--language", "French", "--no-open", "--api-url", &api.url()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(ctx.instructions_path()).unwrap(), HTML);
}

#[test]
fn empty_language_keeps_script_but_writes_no_instructions() {
    let ctx = TestContext::new();
    let url = ctx.remote_repository("widget", &[("README.md", README)]);
    let mut api = ChatApi::start();
    let _install = api.install_reply(&ChatApi::completion_body(Some("true\n")));

    ctx.cli()
        .args(["--url", &url, "--language", " ", "--no-open", "--api-url", &api.url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No language provided"));

    assert!(ctx.install_script_path().exists());
    assert!(!ctx.instructions_path().exists());
}

#[test]
fn api_error_body_is_dumped() {
    let ctx = TestContext::new();
    let url = ctx.remote_repository("widget", &[("README.md", README)]);
    let mut api = ChatApi::start();
    let body = r#"{"error":{"message":"Incorrect API key provided","code":"invalid_api_key"}}"#;
    let _install = api.install_reply(body);

    ctx.cli()
        .args(["--url", &url, "--no-open", "--api-url", &api.url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid_api_key"));

    assert!(!ctx.install_script_path().exists());
}
