//! CLI integration tests for cem.
//!
//! These tests run the binary against the fixture manifests, covering
//! discovery, listing, trees, queries, and normalization.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the cem binary command.
fn cem() -> Command {
    let mut cmd = Command::cargo_bin("cem").unwrap();
    cmd.env_remove("CEM_MANIFEST").arg("--no-color");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A project directory containing the components fixture as
/// `custom-elements.json`.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::copy(
        fixture("components.json"),
        tmp.path().join("custom-elements.json"),
    )
    .unwrap();
    tmp
}

// ============================================================================
// cem list
// ============================================================================

#[test]
fn test_list_tags() {
    let tmp = project();

    cem()
        .args(["list", "tags"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("| Tag"))
        .stdout(predicate::str::contains("my-button"))
        .stdout(predicate::str::contains("my-card (DEPRECATED: Use my-panel.)"));
}

#[test]
fn test_list_tags_hide_deprecated() {
    let tmp = project();

    cem()
        .args(["list", "tags", "--deprecated", "hide"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("my-button"))
        .stdout(predicate::str::contains("my-card").not());
}

#[test]
fn test_list_attributes_for_tag() {
    let tmp = project();

    cem()
        .args(["list", "attributes", "--tag-name", "my-button"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DOM Property"))
        .stdout(predicate::str::contains("Disables the button."));
}

#[test]
fn test_list_members_as_tree() {
    let tmp = project();

    cem()
        .args(["list", "css-properties", "-t", "my-button", "--format", "tree"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("└── --my-button-color"));
}

#[test]
fn test_list_unknown_column_suggests() {
    let tmp = project();

    cem()
        .args(["list", "attributes", "-t", "my-button", "--columns", "Sumary"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean `Summary`?"))
        .stderr(predicate::str::contains("available columns"));
}

#[test]
fn test_list_unknown_tag() {
    let tmp = project();

    cem()
        .args(["list", "slots", "--tag-name", "my-panel"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("`my-panel`"))
        .stderr(predicate::str::contains("cem list tags"));
}

#[test]
fn test_list_members_requires_tag() {
    let tmp = project();

    cem()
        .args(["list", "events"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--tag-name"));
}

// ============================================================================
// cem tree
// ============================================================================

#[test]
fn test_tree_package() {
    let tmp = project();

    cem()
        .arg("tree")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<root>"))
        .stdout(predicate::str::contains("module src/my-button.js"))
        .stdout(predicate::str::contains("Attributes"));
}

#[test]
fn test_tree_element_hide_deprecated() {
    let tmp = project();

    cem()
        .args(["tree", "--tag-name", "my-button", "--deprecated", "hide"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("variant"))
        .stdout(predicate::str::contains("DEPRECATED").not());
}

// ============================================================================
// cem query
// ============================================================================

#[test]
fn test_query_element() {
    let tmp = project();

    cem()
        .args(["query", "elements", "my-button.modulePath"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("\"src/my-button.js\"\n");
}

#[test]
fn test_query_count() {
    let tmp = project();

    cem()
        .args(["query", "manifest", "modules", "--filter", "count"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_query_missing_path() {
    let tmp = project();

    cem()
        .args(["query", "elements", "x-nope.tagName"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in source 'elements'"))
        .stderr(predicate::str::contains("help: Run `cem query elements`"));
}

// ============================================================================
// cem normalize
// ============================================================================

#[test]
fn test_normalize_to_file_round_trips() {
    let tmp = project();
    let output = tmp.path().join("normalized.json");

    cem()
        .args(["normalize", "--output"])
        .arg(&output)
        .current_dir(tmp.path())
        .assert()
        .success();

    let first = fs::read_to_string(&output).unwrap();
    assert!(first.contains("\"path\": \"src/my-button.js\""));
    assert!(first.contains("\"deprecated\": false"));

    cem()
        .args(["normalize", "--manifest"])
        .arg(&output)
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(first);
}

#[test]
fn test_normalize_unknown_export_fails() {
    let tmp = TempDir::new().unwrap();

    cem()
        .args(["normalize", "--manifest"])
        .arg(fixture("unknown-export.json"))
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown export kind `weird`"));
}

#[test]
fn test_invalid_json_reports_position() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("custom-elements.json"), "{\n  \"modules\": [\n").unwrap();

    cem()
        .args(["list", "tags"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest is not valid JSON"))
        .stderr(predicate::str::contains("line"));
}

// ============================================================================
// Manifest discovery
// ============================================================================

#[test]
fn test_missing_manifest() {
    let tmp = TempDir::new().unwrap();

    cem()
        .args(["list", "tags"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find `custom-elements.json`"))
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn test_package_json_discovery_from_subdirectory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("dist")).unwrap();
    fs::create_dir_all(tmp.path().join("src/components")).unwrap();
    fs::copy(fixture("components.json"), tmp.path().join("dist/cem.json")).unwrap();
    fs::write(
        tmp.path().join("package.json"),
        r#"{"name": "components", "customElements": "dist/cem.json"}"#,
    )
    .unwrap();

    cem()
        .args(["list", "modules"])
        .current_dir(tmp.path().join("src/components"))
        .assert()
        .success()
        .stdout(predicate::str::contains("src/utils.js"));
}

#[test]
fn test_manifest_from_env() {
    let tmp = TempDir::new().unwrap();

    cem()
        .args(["list", "tags"])
        .env("CEM_MANIFEST", fixture("components.json"))
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("my-card"));
}

#[test]
fn test_project_config_defaults() {
    let tmp = project();
    fs::create_dir_all(tmp.path().join(".cem")).unwrap();
    fs::write(
        tmp.path().join(".cem/config.toml"),
        "[list]\nformat = \"tree\"\n",
    )
    .unwrap();

    cem()
        .args(["list", "tags"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Custom Elements"));
}

// ============================================================================
// cem completions
// ============================================================================

#[test]
fn test_completions_bash() {
    cem()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cem"));
}
