use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;
use std::path::Path;

const OBSTRUCTION: &str = "There is an untracked file in the way; delete it or add it first.";

/// Branch `other` tracks a file `d`; master does not and has moved on.
/// Returns the tip of `other`.
fn track_d_on_other_branch(dir: &Path) -> String {
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "d", "tracked d\n", "add d");
    let other_tip = head_commit_id(dir);
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
    commit_file(dir, "g.txt", "G\n", "master moves on");

    write_file(FileSpec::new(
        dir.join("d/precious.txt"),
        "local work\n".to_string(),
    ));

    other_tip
}

#[rstest]
fn untracked_directory_blocks_checkout(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    track_d_on_other_branch(dir);

    run_gitlet_command(dir, &["checkout", "other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(OBSTRUCTION));

    assert_eq!(read_file(&dir.join("d/precious.txt")), "local work\n");
    assert_eq!(read_file(&dir.join("g.txt")), "G\n");
}

#[rstest]
fn untracked_directory_blocks_reset(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let other_tip = track_d_on_other_branch(dir);
    let master_tip = head_commit_id(dir);

    run_gitlet_command(dir, &["reset", &other_tip])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(OBSTRUCTION));

    assert_eq!(read_file(&dir.join("d/precious.txt")), "local work\n");
    assert_eq!(head_commit_id(dir), master_tip);
}

#[rstest]
fn untracked_directory_blocks_merge(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    track_d_on_other_branch(dir);
    let master_tip = head_commit_id(dir);

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(OBSTRUCTION));

    assert_eq!(read_file(&dir.join("d/precious.txt")), "local work\n");
    assert_eq!(head_commit_id(dir), master_tip);
}

#[rstest]
fn untracked_file_where_a_directory_is_needed_blocks_checkout(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    run_gitlet_command(dir, &["rm", "f.txt"]).assert().success();
    run_gitlet_command(dir, &["commit", "drop f"]).assert().success();
    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "d/x.txt", "X\n", "add d/x");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
    std::fs::write(dir.join("d"), "local work\n").unwrap();

    run_gitlet_command(dir, &["checkout", "other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(OBSTRUCTION));

    // nothing was written either
    assert_eq!(read_file(&dir.join("d")), "local work\n");
    assert!(!dir.join("f.txt").exists());
}
