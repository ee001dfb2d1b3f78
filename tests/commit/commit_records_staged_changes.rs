use crate::common::command::{
    commit_file, gitlet_commit, init_repository_dir, initialize_repository, log_commit_ids,
    run_gitlet_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_advances_the_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let before = log_commit_ids(dir);

    commit_file(dir, "g.txt", "G\n", "second");

    let after = log_commit_ids(dir);
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[1..], &before[..]);
}

#[rstest]
fn commit_without_staged_changes_fails(init_repository_dir: TempDir) {
    gitlet_commit(init_repository_dir.path(), "nothing")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No changes added to the commit."));
}

#[rstest]
fn commit_with_empty_message_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("g.txt"), "G\n").unwrap();
    run_gitlet_command(dir, &["add", "g.txt"]).assert().success();

    gitlet_commit(dir, "")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please enter a commit message."));
}

#[rstest]
fn commit_ids_are_deterministic(init_repository_dir: TempDir) {
    // the fixture pins the commit date, so replaying the same history in
    // another repository yields the same IDs
    let other_dir = TempDir::new().unwrap();
    initialize_repository(other_dir.path());

    assert_eq!(
        log_commit_ids(init_repository_dir.path()),
        log_commit_ids(other_dir.path())
    );
}
