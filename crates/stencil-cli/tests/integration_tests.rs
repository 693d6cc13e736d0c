//! End-to-end tests for the `stencil` binary.
//!
//! Each test builds a throw-away template root under a tempdir and points the
//! binary at it with `--template-root`, so nothing depends on the machine's
//! real configuration.  `--no-install` keeps the package-manager step out of
//! the picture.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Build a template root containing one `node-app` template:
///
/// ```text
/// node-app/
///   README.md            (uses <%= projectName %>)
///   .template.json       (must never be copied)
///   node_modules/junk    (must never be copied)
///   src/
///     index.js           (uses <%= projectName %>)
/// ```
fn template_root() -> TempDir {
    let root = TempDir::new().unwrap();
    let tpl = root.path().join("node-app");

    fs::create_dir_all(tpl.join("src")).unwrap();
    fs::create_dir_all(tpl.join("node_modules")).unwrap();
    fs::write(tpl.join("README.md"), "# <%= projectName %>\n").unwrap();
    fs::write(tpl.join(".template.json"), "{\"name\": \"node-app\"}").unwrap();
    fs::write(tpl.join("node_modules").join("junk"), "cache").unwrap();
    fs::write(
        tpl.join("src").join("index.js"),
        "console.log('<%= projectName %> is alive');\n",
    )
    .unwrap();

    root
}

fn stencil() -> Command {
    let mut cmd = Command::cargo_bin("stencil").unwrap();
    // Keep host environment out of the runs.
    cmd.env_remove("STENCIL_TEMPLATE_ROOT");
    cmd
}

#[test]
fn help_flag() {
    stencil()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("template"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_flag() {
    stencil()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_creates_project_with_substituted_files() {
    let templates = template_root();
    let workdir = TempDir::new().unwrap();

    stencil()
        .current_dir(workdir.path())
        .args([
            "--template-root",
            templates.path().to_str().unwrap(),
            "new",
            "demo-app",
            "--template",
            "node-app",
            "--yes",
            "--no-install",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    let project = workdir.path().join("demo-app");
    assert!(project.is_dir());
    assert_eq!(
        fs::read_to_string(project.join("README.md")).unwrap(),
        "# demo-app\n"
    );
    assert_eq!(
        fs::read_to_string(project.join("src").join("index.js")).unwrap(),
        "console.log('demo-app is alive');\n"
    );

    // Skip-listed entries never reach the target.
    assert!(!project.join(".template.json").exists());
    assert!(!project.join("node_modules").exists());
}

#[test]
fn new_dry_run_writes_nothing() {
    let templates = template_root();
    let workdir = TempDir::new().unwrap();

    stencil()
        .current_dir(workdir.path())
        .args([
            "--template-root",
            templates.path().to_str().unwrap(),
            "new",
            "demo-app",
            "--template",
            "node-app",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!workdir.path().join("demo-app").exists());
}

#[test]
fn new_refuses_existing_directory() {
    let templates = template_root();
    let workdir = TempDir::new().unwrap();
    fs::create_dir(workdir.path().join("taken")).unwrap();

    stencil()
        .current_dir(workdir.path())
        .args([
            "--template-root",
            templates.path().to_str().unwrap(),
            "new",
            "taken",
            "--template",
            "node-app",
            "--yes",
            "--no-install",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // The pre-existing directory is untouched.
    assert_eq!(fs::read_dir(workdir.path().join("taken")).unwrap().count(), 0);
}

#[test]
fn new_unknown_template_exits_not_found() {
    let templates = template_root();
    let workdir = TempDir::new().unwrap();

    stencil()
        .current_dir(workdir.path())
        .args([
            "--template-root",
            templates.path().to_str().unwrap(),
            "new",
            "demo-app",
            "--template",
            "does-not-exist",
            "--yes",
            "--no-install",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Template not found"));

    assert!(!workdir.path().join("demo-app").exists());
}

#[test]
fn new_quiet_suppresses_stdout() {
    let templates = template_root();
    let workdir = TempDir::new().unwrap();

    stencil()
        .current_dir(workdir.path())
        .args([
            "--quiet",
            "--template-root",
            templates.path().to_str().unwrap(),
            "new",
            "demo-app",
            "--template",
            "node-app",
            "--yes",
            "--no-install",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(workdir.path().join("demo-app").is_dir());
}

#[test]
fn list_shows_template_names() {
    let templates = template_root();

    stencil()
        .args(["--template-root", templates.path().to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node-app"));
}

#[test]
fn list_plain_format_is_one_name_per_line() {
    let templates = template_root();
    fs::create_dir(templates.path().join("rust-cli")).unwrap();

    stencil()
        .args([
            "--template-root",
            templates.path().to_str().unwrap(),
            "list",
            "--format",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::eq("node-app\nrust-cli\n"));
}

#[test]
fn list_json_format_is_parseable() {
    let templates = template_root();

    let output = stencil()
        .args([
            "--template-root",
            templates.path().to_str().unwrap(),
            "list",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let names: Vec<String> = serde_json::from_slice(&output).unwrap();
    assert_eq!(names, vec!["node-app"]);
}

#[test]
fn config_get_reads_defaults() {
    stencil()
        .args(["config", "get", "install.command"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm"));
}

#[test]
fn config_get_unknown_key_is_a_config_error() {
    stencil()
        .args(["config", "get", "not.a.key"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn completions_bash_mentions_the_binary() {
    stencil()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stencil"));
}
