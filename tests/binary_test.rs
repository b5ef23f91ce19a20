//! Process-level behavior of the `dectree` binary: exit status and streams.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use dectree::infrastructure::load_dataset;
use dectree::TreeBuilder;
use rstest::rstest;
use tempfile::TempDir;

use common::{prototype_examples, write_dataset};

fn dectree(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dectree"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("DECTREE_CONFIG")
        .env_remove("DECTREE_TERMINATION_RATIO")
        .output()
        .expect("spawn dectree")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[rstest]
#[case::no_arguments(&[])]
#[case::one_positional(&["train.bin"])]
#[case::three_positionals(&["a.bin", "b.bin", "c.bin"])]
#[case::unknown_flag(&["--bogus", "a.bin", "b.bin"])]
fn given_wrong_arguments_when_running_then_exits_one_with_nothing_on_stdout(
    #[case] args: &[&str],
) {
    let output = dectree(args);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn given_help_flag_when_running_then_exits_zero() {
    let output = dectree(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("TRAINING_DATA"));
}

#[test]
fn given_missing_training_file_when_running_then_exits_one_with_error_on_stderr() {
    let dir = TempDir::new().unwrap();
    let test = write_dataset(&dir, "test.bin", &prototype_examples(1, 5, 0));
    let missing = dir.path().join("missing.bin");

    let output = dectree(&[path_str(&missing), path_str(&test)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "{stderr}");
    assert!(stderr.contains("missing.bin"), "{stderr}");
}

#[test]
fn given_valid_datasets_when_running_then_stdout_is_only_the_count() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let train = write_dataset(&dir, "train.bin", &prototype_examples(7, 120, 30));
    let mut examples = prototype_examples(7, 150, 30);
    let test = write_dataset(&dir, "test.bin", &examples.split_off(120));

    let tree = TreeBuilder::new()
        .build(&load_dataset(&train).unwrap())
        .unwrap();
    let expected = load_dataset(&test)
        .unwrap()
        .iter()
        .filter(|&(image, label)| tree.classify(image).unwrap() == label)
        .count();

    // Act
    let output = dectree(&["--print-tree", path_str(&train), path_str(&test)]);

    // Assert
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), format!("{expected}\n"));
}
