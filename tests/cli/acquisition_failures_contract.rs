use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unreachable_repository_fails_clone() {
    let ctx = TestContext::new();
    let missing = ctx.home().join("remotes").join("missing.git");

    ctx.cli()
        .arg("--url")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to clone"));

    assert!(!ctx.work_dir().join("missing").exists());
}

#[test]
fn repository_without_readme_fails_before_any_request() {
    let ctx = TestContext::new();
    let url = ctx.remote_repository("widget", &[("setup.py", "print('hi')\n")]);

    // No API server is running: a request attempt would fail with a transport error.
    ctx.cli()
        .args(["--url", &url, "--api-url", "http://127.0.0.1:1/v1/chat/completions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No README found"));

    assert!(ctx.work_dir().join("widget").is_dir());
    assert!(!ctx.install_script_path().exists());
}

#[test]
fn malformed_config_is_reported() {
    let ctx = TestContext::new();
    let config = ctx.write_root_file("bad.toml", "[api\nmodel =");

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}
