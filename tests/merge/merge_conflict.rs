use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, run_gitlet_command, run_stdout,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn conflicting_edits_are_written_with_markers(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "f.txt", "C\n", "master edit");
    let master_tip = head_commit_id(dir);
    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "f.txt", "B\n", "other edit");
    let other_tip = head_commit_id(dir);
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encountered a merge conflict."));

    assert_eq!(
        read_file(&dir.join("f.txt")),
        "<<<<<<< HEAD\nC\n=======\nB\n>>>>>>>\n"
    );

    let log = run_stdout(dir, &["log"]);
    let merge_entry = log.split("===\n").nth(1).unwrap();
    assert!(merge_entry.contains(&format!(
        "Merge: {} {}\n",
        &master_tip[..7],
        &other_tip[..7]
    )));
    assert!(merge_entry.contains("Merged other into master.\n"));
}

#[rstest]
fn deleted_on_one_side_and_modified_on_the_other_conflicts(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    run_gitlet_command(dir, &["rm", "f.txt"]).assert().success();
    run_gitlet_command(dir, &["commit", "drop f"]).assert().success();
    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "f.txt", "B\n", "other edit");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encountered a merge conflict."));

    assert_eq!(
        read_file(&dir.join("f.txt")),
        "<<<<<<< HEAD\n=======\nB\n>>>>>>>\n"
    );
}
