//! Error handling integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_malformed_json_context_with_format() {
    let workspace = common::TestWorkspace::new();

    common::stache_cmd_in(&workspace.path)
        .args(["Hi {{name}}", "{bad", "--format", "json"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to parse JSON context"));

    assert!(workspace.list_dir(".").is_empty());
}

#[test]
fn test_malformed_context_without_format() {
    let workspace = common::TestWorkspace::new();

    common::stache_cmd_in(&workspace.path)
        .args(["Hi {{name}}", "{bad", "--multiple", "name"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));

    assert!(workspace.list_dir(".").is_empty());
}

#[test]
fn test_malformed_json_file() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("context.json", "{\"name\": ");

    common::stache_cmd_in(&workspace.path)
        .args(["Hi {{name}}", "context.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("context.json"));
}

#[test]
fn test_missing_csv_file() {
    let workspace = common::TestWorkspace::new();

    common::stache_cmd_in(&workspace.path)
        .args(["Hi {{name}}", "missing.csv", "--multiple", "name"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to open CSV file"))
        .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn test_ragged_csv() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("people.csv", "name,age\nchris\n");

    common::stache_cmd_in(&workspace.path)
        .args(["Hi {{name}}", "people.csv", "--multiple", "name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse CSV context"));

    assert!(!workspace.file_exists("chris"));
}

#[test]
fn test_unterminated_front_matter_in_template() {
    let workspace = common::TestWorkspace::new();

    common::stache_cmd_in(&workspace.path)
        .args(["---\nname: chris\nHi {{name}}", "{}"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("never closed"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_unterminated_front_matter_on_stdin() {
    let workspace = common::TestWorkspace::new();

    common::stache_cmd_in(&workspace.path)
        .arg("Hi {{name}}")
        .write_stdin("---\nname: chris\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("never closed"));
}

#[test]
fn test_directory_as_context_is_not_a_literal() {
    let workspace = common::TestWorkspace::new();
    std::fs::create_dir_all(workspace.path.join("ctx")).expect("Failed to create directory");

    common::stache_cmd_in(&workspace.path)
        .args(["Hi {{name}}", "ctx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_scalar_context() {
    let workspace = common::TestWorkspace::new();

    common::stache_cmd_in(&workspace.path)
        .args(["Hi {{name}}", "just some words"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Context must be a mapping"));
}

#[test]
fn test_unclosed_section() {
    let workspace = common::TestWorkspace::new();

    common::stache_cmd_in(&workspace.path)
        .args(["{{#items}}never closed", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to render template"));
}
