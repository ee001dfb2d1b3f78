use crate::common::command::{commit_file, init_repository_dir, log_commit_ids, run_gitlet_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn checkout_file_restores_the_tip_version(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("f.txt"), "scribbled\n").unwrap();

    run_gitlet_command(dir, &["checkout", "--", "f.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("f.txt")), "A\n");
}

#[rstest]
fn checkout_file_from_an_abbreviated_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = log_commit_ids(dir)[0].clone();
    commit_file(dir, "f.txt", "B\n", "second");

    run_gitlet_command(dir, &["checkout", &first[..8], "--", "f.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("f.txt")), "A\n");
    // the branch does not move
    assert_eq!(log_commit_ids(dir).len(), 3);
}

#[rstest]
#[case::unknown_commit(&["checkout", "0123456789abcdef", "--", "f.txt"], "No commit with that id exists.")]
#[case::file_not_in_commit(&["checkout", "--", "missing.txt"], "File does not exist in that commit.")]
fn checkout_file_failures(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] message: &str,
) {
    run_gitlet_command(init_repository_dir.path(), args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(message));
}
