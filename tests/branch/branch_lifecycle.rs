use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command, run_stdout};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

fn branches_section(dir: &std::path::Path) -> String {
    let status = run_stdout(dir, &["status"]);
    status
        .split("\n\n")
        .next()
        .unwrap_or_default()
        .to_string()
}

#[rstest]
fn branch_creates_pointer_without_switching(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "dev"]).assert().success();

    assert_eq!(branches_section(dir), "=== Branches ===\ndev\n*master");
}

#[rstest]
fn duplicate_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "dev"]).assert().success();

    run_gitlet_command(dir, &["branch", "dev"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "A branch with that name already exists.",
        ));
}

#[rstest]
fn rm_branch_keeps_its_commits(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "dev"]).assert().success();
    run_gitlet_command(dir, &["checkout", "dev"]).assert().success();
    commit_file(dir, "f.txt", "dev\n", "dev work");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    run_gitlet_command(dir, &["rm-branch", "dev"])
        .assert()
        .success();

    assert_eq!(branches_section(dir), "=== Branches ===\n*master");
    assert!(!run_stdout(dir, &["find", "dev work"]).contains("Found no commit"));
}

#[rstest]
#[case::current_branch("master", "Cannot remove the current branch.")]
#[case::unknown_branch("nope", "A branch with that name does not exist.")]
fn rm_branch_failures(init_repository_dir: TempDir, #[case] branch: &str, #[case] message: &str) {
    run_gitlet_command(init_repository_dir.path(), &["rm-branch", branch])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(message));
}
