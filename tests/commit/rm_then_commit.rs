use crate::common::command::{
    gitlet_commit, init_repository_dir, run_gitlet_command, run_stdout,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn rm_deletes_tracked_file_and_commit_untracks_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["rm", "f.txt"]).assert().success();
    assert!(!dir.join("f.txt").exists());
    assert!(run_stdout(dir, &["status"]).contains("=== Removed Files ===\nf.txt\n"));

    gitlet_commit(dir, "remove f").assert().success();

    let status = run_stdout(dir, &["status"]);
    assert!(status.contains("=== Removed Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\n\n"));

    // recreating the file now makes it untracked
    std::fs::write(dir.join("f.txt"), "A\n").unwrap();
    assert!(run_stdout(dir, &["status"]).contains("=== Untracked Files ===\nf.txt\n"));
}

#[rstest]
fn rm_of_a_staged_untracked_file_only_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("new.txt"), "new\n").unwrap();
    run_gitlet_command(dir, &["add", "new.txt"]).assert().success();

    run_gitlet_command(dir, &["rm", "new.txt"]).assert().success();

    assert!(dir.join("new.txt").exists());
    let status = run_stdout(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\nnew.txt\n"));
}

#[rstest]
fn rm_of_an_unknown_file_is_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("stray.txt"), "stray\n").unwrap();

    run_gitlet_command(dir, &["rm", "stray.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reason to remove the file."));
    assert!(dir.join("stray.txt").exists());
}

#[rstest]
fn add_after_rm_cancels_the_removal(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["rm", "f.txt"]).assert().success();

    std::fs::write(dir.join("f.txt"), "A\n").unwrap();
    run_gitlet_command(dir, &["add", "f.txt"]).assert().success();

    let status = run_stdout(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Removed Files ===\n\n"));
}
