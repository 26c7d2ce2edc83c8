// file: tests/cli_tests.rs
// version: 1.0.0
// guid: 8b2f9c04-e7a1-4d56-b3c8-0a6e4d19f7b2

//! End-to-end tests for the scout-command binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_node(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn scout_command() -> Command {
    let mut cmd = Command::cargo_bin("scout-command").unwrap();
    cmd.env_remove("SCOUT_ENVIRONMENT").env_remove("SCOUT_NODE_NAME");
    cmd
}

#[test]
fn test_render_plain() {
    let dir = TempDir::new().unwrap();
    let node = write_node(&dir, "node.yaml", "name: i-12345678\nscout:\n  key: key\n");

    scout_command()
        .args(["render", "--node"])
        .arg(&node)
        .assert()
        .success()
        .stdout("scout key\n");
}

#[test]
fn test_render_with_overrides() {
    let dir = TempDir::new().unwrap();
    let node = write_node(
        &dir,
        "node.yaml",
        "name: i-12345678\nscout:\n  key:\n    production: prod-key\n  name: \"%{chef_environment} (%{name})\"\n",
    );

    scout_command()
        .args(["render", "--environment", "production", "--node-name", "web-1", "--node"])
        .arg(&node)
        .assert()
        .success()
        .stdout("scout prod-key --name 'production (web-1)'\n");
}

#[test]
fn test_render_environment_from_env_var() {
    let dir = TempDir::new().unwrap();
    let node = write_node(
        &dir,
        "node.toml",
        "name = \"i-1\"\n\n[scout.key]\nstaging = \"stage-key\"\n",
    );

    scout_command()
        .env("SCOUT_ENVIRONMENT", "staging")
        .args(["render", "--node"])
        .arg(&node)
        .assert()
        .success()
        .stdout("scout stage-key\n");
}

#[test]
fn test_render_json() {
    let dir = TempDir::new().unwrap();
    let node = write_node(
        &dir,
        "node.json",
        r#"{"name": "i-1", "scout": {"key": "secret-key", "options": {"level": "debug"}}}"#,
    );

    scout_command()
        .args(["render", "--json", "--node"])
        .arg(&node)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"arguments\": \"--level 'debug'\""))
        .stdout(predicate::str::contains("\"key\"").not());
}

#[test]
fn test_render_missing_key_fails() {
    let dir = TempDir::new().unwrap();
    let node = write_node(&dir, "node.yaml", "name: i-12345678\nscout: {}\n");

    scout_command()
        .args(["render", "--node"])
        .arg(&node)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("MissingKey"));
}

#[test]
fn test_install_plan_detected_rbenv() {
    let dir = TempDir::new().unwrap();
    let node = write_node(
        &dir,
        "node.yaml",
        "scout:\n  rbenv_ruby_string: 1.9.3-p194\n  gem_packages:\n    scout_api: ~\n",
    );

    scout_command()
        .args(["install-plan", "--node"])
        .arg(&node)
        .assert()
        .success()
        .stdout(
            "RBENV_VERSION=1.9.3-p194 rbenv exec gem install scout\n\
             RBENV_VERSION=1.9.3-p194 rbenv exec gem install scout_api\n",
        );
}

#[test]
fn test_install_plan_unknown_manager_rejected() {
    let dir = TempDir::new().unwrap();
    let node = write_node(&dir, "node.yaml", "scout: {}\n");

    scout_command()
        .args(["install-plan", "--manager", "chruby", "--node"])
        .arg(&node)
        .assert()
        .failure();
}
