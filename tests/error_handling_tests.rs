//! Error handling integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_missing_schema_file() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("bundle.json", r#"{"name": "svc"}"#);

    common::bundler_cmd(&workspace.path)
        .args(["missing.json", "bundle.json"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("File not found")
                .and(predicate::str::contains("missing.json")),
        );

    assert_eq!(workspace.read_file("bundle.json"), r#"{"name": "svc"}"#);
}

#[test]
fn test_malformed_schema_touches_no_bundle() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("schema.json", r#"{"type": "Query""#);
    workspace.write_file("bundle.json", r#"{"name": "svc"}"#);

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse json document"));

    assert_eq!(workspace.read_file("bundle.json"), r#"{"name": "svc"}"#);
}

#[test]
fn test_missing_bundle_aborts_remaining() {
    let workspace = common::TestWorkspace::new();
    workspace.write_schema();
    workspace.write_file("first.json", r#"{"n": 1}"#);
    workspace.write_file("last.json", r#"{"n": 3}"#);

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "first.json", "missing.json", "last.json"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("File not found")
                .and(predicate::str::contains("missing.json")),
        );

    // Written before the failure point
    assert!(workspace.read_json("first.json").get("graphql").is_some());
    // Never reached
    assert_eq!(workspace.read_file("last.json"), r#"{"n": 3}"#);
}

#[test]
fn test_malformed_bundle_is_left_as_is() {
    let workspace = common::TestWorkspace::new();
    workspace.write_schema();
    workspace.write_file("bundle.yml", "name: [svc\n");

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse yaml document"));

    assert_eq!(workspace.read_file("bundle.yml"), "name: [svc\n");
}

#[test]
fn test_bundle_must_be_mapping() {
    let workspace = common::TestWorkspace::new();
    workspace.write_schema();
    workspace.write_file("bundle.json", "[1, 2, 3]");

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a mapping"));
}

#[test]
fn test_unknown_format() {
    let workspace = common::TestWorkspace::new();
    workspace.write_schema();
    workspace.write_file("bundle.dat", "key: [unterminated\n");

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.dat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to detect the format"));
}

#[test]
fn test_null_into_toml_fails_without_writing() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("schema.json", r#"{"type": null}"#);
    workspace.write_file("bundle.toml", "name = \"svc\"\n");

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to serialize toml document"));

    assert_eq!(workspace.read_file("bundle.toml"), "name = \"svc\"\n");
}

#[cfg(unix)]
#[test]
fn test_read_only_bundle_reports_write_failure() {
    use std::os::unix::fs::PermissionsExt;

    let workspace = common::TestWorkspace::new();
    workspace.write_schema();
    let bundle = workspace.write_file("bundle.json", "{}");
    std::fs::set_permissions(&bundle, std::fs::Permissions::from_mode(0o444))
        .expect("Failed to set permissions");

    // Root ignores file permissions, so the write may legitimately succeed there.
    if std::fs::OpenOptions::new().write(true).open(&bundle).is_ok() {
        return;
    }

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write file"));
}

#[test]
fn test_check_reports_stale_bundles_without_writing() {
    let workspace = common::TestWorkspace::new();
    workspace.write_schema();
    workspace.write_file("stale.json", r#"{"n": 1}"#);

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "stale.json", "--check"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("out of date").and(predicate::str::contains("stale.json")),
        );

    assert_eq!(workspace.read_file("stale.json"), r#"{"n": 1}"#);
}

#[test]
fn test_check_passes_after_update() {
    let workspace = common::TestWorkspace::new();
    workspace.write_schema();
    workspace.write_file("bundle.json", r#"{"n": 1}"#);

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.json"])
        .assert()
        .success();

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.json", "--check"])
        .assert()
        .success();
}

#[test]
fn test_toml_datetime_bundle_is_left_as_is() {
    let workspace = common::TestWorkspace::new();
    workspace.write_schema();
    let content = "name = \"svc\"\nreleased = 1979-05-27T07:32:00Z\n";
    workspace.write_file("bundle.toml", content);

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.toml"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Failed to parse toml document")
                .and(predicate::str::contains("released")),
        );

    assert_eq!(workspace.read_file("bundle.toml"), content);
}

#[test]
fn test_yaml_tagged_bundle_is_left_as_is() {
    let workspace = common::TestWorkspace::new();
    workspace.write_schema();
    let content = "name: svc\nsecret: !vault path/to/key\n";
    workspace.write_file("bundle.yml", content);

    common::bundler_cmd(&workspace.path)
        .args(["schema.json", "bundle.yml"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Failed to parse yaml document")
                .and(predicate::str::contains("!vault")),
        );

    assert_eq!(workspace.read_file("bundle.yml"), content);
}
