//! End-to-end tests for `tagmixer generate` command.

mod fixtures;

use fixtures::*;

#[test]
fn test_generate_single_label_full_prefix() {
    let dir = temp_config_dir();
    let output = run(
        &[
            "generate",
            "--no-catalog",
            "--select",
            "monet",
            "--prefix",
            "all",
            "--min-weight",
            "1",
            "--max-weight",
            "1",
        ],
        dir.path(),
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generation should succeed. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output).trim_end(), "1.00::artist:monet::");
}

#[test]
fn test_generate_zero_weight_leaves_tag_unwrapped() {
    let dir = temp_config_dir();
    let output = run(
        &[
            "generate",
            "--no-catalog",
            "-s",
            "degas",
            "--prefix",
            "none",
            "--min-weight",
            "0",
            "--max-weight",
            "0",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "degas");
}

#[test]
fn test_generate_with_seed_is_reproducible() {
    let dir = temp_config_dir();
    let args = [
        "generate", "--all", "--seed", "42", "-n", "5", "--min-tags", "2", "--max-tags", "6",
    ];

    let first = run(&args, dir.path());
    let second = run(&args, dir.path());

    assert_eq!(first.status.code(), Some(0), "stderr: {}", stderr(&first));
    assert_eq!(stdout(&first), stdout(&second));
    assert_eq!(stdout(&first).lines().count(), 5);
}

#[test]
fn test_generate_respects_tag_count_bounds() {
    let dir = temp_config_dir();
    let output = run(
        &[
            "generate", "--all", "--min-tags", "4", "--max-tags", "4", "-n", "10",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    for line in stdout(&output).lines() {
        assert_eq!(line.split(", ").count(), 4, "unexpected line: {line}");
    }
}

#[test]
fn test_generate_empty_selection_exit_code() {
    let dir = temp_config_dir();
    let output = run(&["generate", "--no-catalog"], dir.path());

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Select at least one artist tag to combine"));
}

#[test]
fn test_generate_search_selects_matches_only() {
    let dir = temp_config_dir();
    let labels = write_labels_file(dir.path(), "labels.txt", "monet, manet\ndegas\nturner");

    let output = run(
        &[
            "generate",
            "--no-catalog",
            "--import",
            labels.to_str().unwrap(),
            "--search",
            "NET",
            "--min-tags",
            "2",
            "--max-tags",
            "2",
            "--prefix",
            "none",
            "--min-weight",
            "0",
            "--max-weight",
            "0",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let mut tags: Vec<String> = stdout(&output)
        .trim_end()
        .split(", ")
        .map(str::to_string)
        .collect();
    tags.sort();
    assert_eq!(tags, ["manet", "monet"]);
}

#[test]
fn test_generate_json_output() {
    let dir = temp_config_dir();
    let output = run(
        &["generate", "--all", "-n", "3", "--seed", "7", "--json"],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");

    let results = json["results"].as_array().expect("results array");
    let history = json["history"].as_array().expect("history array");
    assert_eq!(results.len(), 3);
    assert_eq!(history.len(), 3);
    // History is most recent first
    assert_eq!(history[0], results[2]);
}

#[test]
fn test_generate_rejects_invalid_tag_count() {
    let dir = temp_config_dir();
    let output = run(&["generate", "--all", "--min-tags", "0"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Tag counts must be at least 1"));
}

#[test]
fn test_generate_import_of_missing_file_is_io_error() {
    let dir = temp_config_dir();
    let missing = dir.path().join("nope.txt");
    let output = run(
        &["generate", "--all", "--import", missing.to_str().unwrap()],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read import file"));
}

#[test]
fn test_generate_import_without_labels_is_validation_error() {
    let dir = temp_config_dir();
    let labels = write_labels_file(dir.path(), "blank.txt", " ,\n,, ");
    let output = run(
        &["generate", "--all", "--import", labels.to_str().unwrap()],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_generate_uses_saved_settings() {
    let dir = temp_config_dir();
    let set = run(
        &[
            "config", "set", "--prefix", "none", "--min-weight", "0", "--max-weight", "0",
        ],
        dir.path(),
    );
    assert_eq!(set.status.code(), Some(0), "stderr: {}", stderr(&set));

    let output = run(&["generate", "--no-catalog", "-s", "klimt"], dir.path());
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "klimt");
}

#[test]
fn test_generate_rejects_unbounded_weight_span() {
    let dir = temp_config_dir();
    let output = run(
        &[
            "generate",
            "--all",
            "--min-weight=-1e308",
            "--max-weight=1e308",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Weight range is too wide"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_generate_half_cent_weight_rounds_up() {
    let dir = temp_config_dir();
    let output = run(
        &[
            "generate",
            "--no-catalog",
            "-s",
            "monet",
            "--prefix",
            "none",
            "--min-weight",
            "0.125",
            "--max-weight",
            "0.125",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "0.13::monet::");
}
