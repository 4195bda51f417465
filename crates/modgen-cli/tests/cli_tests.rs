//! Tests for the CLI surface itself: help, version, completions,
//! argument errors, and the `modgen config` subcommands.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn modgen() -> Command {
    let mut cmd = Command::cargo_bin("modgen").unwrap();
    cmd.env_remove("MODGEN_ROOT");
    cmd
}

#[test]
fn test_help_exits_zero() {
    modgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("module"))
        .stdout(predicate::str::contains("entity"))
        .stdout(predicate::str::contains("cache"))
        .stdout(predicate::str::contains("EXAMPLES:"));
}

#[test]
fn test_version_exits_zero() {
    modgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_shows_help() {
    // `arg_required_else_help` renders usage and exits 2.
    modgen()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_subcommand_exits_two() {
    modgen()
        .arg("destroy")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_required_argument_exits_two() {
    modgen()
        .args(["module", "create"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    modgen()
        .args(["--quiet", "-v", "cache", "build"])
        .assert()
        .code(2);
}

#[test]
fn test_completions_bash() {
    modgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("modgen"));
}

#[test]
fn test_completions_zsh() {
    modgen()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef modgen"));
}

#[test]
fn test_config_list_shows_defaults() {
    let project = TempDir::new().unwrap();

    modgen()
        .current_dir(project.path())
        .args(["--no-color", "config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root = \"modules\""))
        .stdout(predicate::str::contains("api_auth = true"))
        .stdout(predicate::str::contains("livewire = false"));
}

#[test]
fn test_config_get_known_and_unknown_keys() {
    let project = TempDir::new().unwrap();

    modgen()
        .current_dir(project.path())
        .args(["--no-color", "config", "get", "capabilities.api_auth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capabilities.api_auth = true"));

    modgen()
        .current_dir(project.path())
        .args(["--no-color", "config", "get", "does.not.exist"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_file_in_working_directory_is_loaded() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("modgen.toml"),
        "root = \"lib/modules\"\n\n[capabilities]\nlivewire = true\n",
    )
    .unwrap();

    modgen()
        .current_dir(project.path())
        .args(["--no-color", "config", "get", "root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root = lib/modules"));

    modgen()
        .current_dir(project.path())
        .args(["--no-color", "config", "get", "capabilities.livewire"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capabilities.livewire = true"));
}

#[test]
fn test_config_flag_pointing_nowhere_exits_four() {
    let project = TempDir::new().unwrap();

    modgen()
        .current_dir(project.path())
        .args(["--config", "missing.toml", "cache", "build"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_malformed_config_file_exits_four() {
    let project = TempDir::new().unwrap();
    let path = project.path().join("modgen.toml");
    fs::write(&path, "root = [not toml").unwrap();

    modgen()
        .current_dir(project.path())
        .args(["cache", "build"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_api_module_requires_the_api_auth_capability() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("modgen.toml"),
        "[capabilities]\napi_auth = false\n",
    )
    .unwrap();

    modgen()
        .current_dir(project.path())
        .args(["--no-color", "module", "create", "Shop", "--api"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("API support is not enabled"));

    assert!(!project.path().join("modules/Shop").exists());
}

#[test]
fn test_livewire_capability_adds_component_artifacts() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("modgen.toml"),
        "[capabilities]\nlivewire = true\n",
    )
    .unwrap();

    modgen()
        .current_dir(project.path())
        .args(["--no-color", "module", "create", "Blog"])
        .assert()
        .success();

    let module = project.path().join("modules/Blog");
    assert!(module.join("Livewire/BlogComponent.php").is_file());
    assert!(module.join("Views/livewire/blog-component.blade.php").is_file());
}

#[test]
fn test_stub_override_directory_wins() {
    let project = TempDir::new().unwrap();
    let stubs = project.path().join("stubs");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(
        stubs.join("model.stub"),
        "<?php\n\n// {{EntityName}} override\n",
    )
    .unwrap();
    fs::write(
        project.path().join("modgen.toml"),
        "stubs_dir = \"stubs\"\n",
    )
    .unwrap();

    modgen()
        .current_dir(project.path())
        .args(["--no-color", "module", "create", "Blog"])
        .assert()
        .success();

    let model = project.path().join("modules/Blog/Models/Blog.php");
    let content = fs::read_to_string(model).unwrap();
    assert_eq!(content, "<?php\n\n// Blog override\n");

    // Stubs without an override still come from the builtins.
    let controller = project
        .path()
        .join("modules/Blog/Http/Controllers/BlogController.php");
    let content = fs::read_to_string(controller).unwrap();
    assert!(content.contains("class BlogController"));
}
