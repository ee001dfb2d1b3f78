use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn merge_with_unknown_branch_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["merge", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "A branch with that name does not exist.",
        ));
}

#[rstest]
fn merge_with_staged_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    std::fs::write(dir.join("g.txt"), "G\n").unwrap();
    run_gitlet_command(dir, &["add", "g.txt"]).assert().success();

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("You have uncommitted changes."));
}

#[rstest]
fn merge_with_itself_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["merge", "master"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Cannot merge a branch with itself.",
        ));
}

#[rstest]
fn untracked_file_in_the_way_blocks_merge(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "f.txt", "master\n", "master edit");
    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "g.txt", "other\n", "add g");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
    std::fs::write(dir.join("g.txt"), "untracked\n").unwrap();

    run_gitlet_command(dir, &["merge", "other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it or add it first.",
        ));
    assert_eq!(std::fs::read_to_string(dir.join("g.txt")).unwrap(), "untracked\n");
}
