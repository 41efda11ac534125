use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn petstore_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("petstore"));
    cmd.env_remove("PETSTORE_DATA");
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    petstore_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pet store"));
}

#[test]
fn test_version() {
    petstore_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("petstore"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    petstore_cmd()
        .args(["query", "{ pets { id } }"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config_and_collection() {
    let temp_dir = TempDir::new().unwrap();

    petstore_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join("petstore.toml").exists());
    assert!(temp_dir.path().join(".petstore").join("pets").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();

    petstore_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    petstore_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_with_custom_id_length() {
    let temp_dir = TempDir::new().unwrap();

    petstore_cmd()
        .args(["init", "--id-length", "12"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp_dir.path().join("petstore.toml")).unwrap();
    assert!(config.contains("id_length = 12"));
}

// =============================================================================
// Query and mutate
// =============================================================================

#[test]
fn test_mutate_and_query_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    petstore_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    petstore_cmd()
        .args([
            "mutate",
            r#"addPet(id: "ignored", name: "Rex", breed: "Labrador") { id name breed }"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rex"));

    petstore_cmd()
        .args(["query", "{ pets { name breed } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rex").and(predicate::str::contains("Labrador")));
}

#[test]
fn test_query_reports_not_found_code() {
    let temp_dir = TempDir::new().unwrap();

    petstore_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    petstore_cmd()
        .args(["query", r#"{ pet(id: "deadbeef") { id } }"#])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("NOT_FOUND"));
}

#[test]
fn test_explicit_data_dir_skips_config_discovery() {
    let temp_dir = TempDir::new().unwrap();

    petstore_cmd()
        .args(["--data-dir", "data", "query", "{ pets { id } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pets\": []"));
}
