//! End-to-end tests for `tagmixer config` commands.

use std::fs;

mod fixtures;

use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let dir = temp_config_dir();
    let output = run(&["config", "show"], dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        stderr(&output)
    );

    let stdout = stdout(&output);
    assert!(stdout.contains("Weight Range: 0.05 - 1.50"));
    assert!(stdout.contains("Tag Count: 3 - 7"));
    assert!(stdout.contains("Prefix: random"));
    assert!(stdout.contains("Built-in Catalog: yes"));
}

#[test]
fn test_config_show_json_schema() {
    let dir = temp_config_dir();
    let output = run(&["config", "show", "--json"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");

    assert!(json["generation"].is_object(), "Should have generation object");
    assert!(json["labels"].is_object(), "Should have labels object");
    assert!(json["ui"].is_object(), "Should have ui object");
    assert_eq!(json["generation"]["distribution"], "uniform");
    assert_eq!(json["generation"]["min_tags"], 3);
    assert_eq!(json["labels"]["use_builtin_catalog"], true);
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists_values() {
    let dir = temp_config_dir();
    let set = run(
        &[
            "config",
            "set",
            "--min-tags",
            "2",
            "--max-tags",
            "9",
            "--distribution",
            "favor-high",
            "--theme",
            "dark",
            "--builtin-catalog",
            "false",
        ],
        dir.path(),
    );
    assert_eq!(set.status.code(), Some(0), "stderr: {}", stderr(&set));
    assert!(stdout(&set).contains("Configuration updated successfully."));
    assert!(dir.path().join("config.toml").exists());

    let show = run(&["config", "show", "--json"], dir.path());
    let json: serde_json::Value = serde_json::from_str(&stdout(&show)).unwrap();
    assert_eq!(json["generation"]["min_tags"], 2);
    assert_eq!(json["generation"]["max_tags"], 9);
    assert_eq!(json["generation"]["distribution"], "favor-high");
    assert_eq!(json["ui"]["theme_mode"], "dark");
    assert_eq!(json["labels"]["use_builtin_catalog"], false);
}

#[test]
fn test_config_set_without_options_fails() {
    let dir = temp_config_dir();
    let output = run(&["config", "set"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option must be specified"));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_zero_tags() {
    let dir = temp_config_dir();
    let output = run(&["config", "set", "--max-tags", "0"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_unknown_mode() {
    let dir = temp_config_dir();
    let output = run(&["config", "set", "--prefix", "sometimes"], dir.path());

    assert_eq!(output.status.code(), Some(2), "clap reports usage errors with 2");
}

#[test]
fn test_disabled_catalog_affects_labels_list() {
    let dir = temp_config_dir();
    run(&["config", "set", "--builtin-catalog", "false"], dir.path());

    let output = run(&["labels", "list", "--count"], dir.path());
    assert_eq!(stdout(&output).trim(), "0");
}

#[test]
fn test_corrupt_config_is_reported() {
    let dir = temp_config_dir();
    fs::write(dir.path().join("config.toml"), "generation = [").unwrap();

    let output = run(&["config", "show"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("config.toml"));
}
