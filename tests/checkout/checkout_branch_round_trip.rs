use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn switching_branches_rewrites_the_working_tree(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "f.txt", "master\n", "change f");
    commit_file(dir, "only_master.txt", "M\n", "add only_master");
    let master_tip = head_commit_id(dir);

    run_gitlet_command(dir, &["checkout", "other"]).assert().success();

    assert_eq!(read_file(&dir.join("f.txt")), "A\n");
    assert!(!dir.join("only_master.txt").exists());

    commit_file(dir, "nested/other.txt", "O\n", "add nested");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    assert_eq!(read_file(&dir.join("f.txt")), "master\n");
    assert_eq!(read_file(&dir.join("only_master.txt")), "M\n");
    assert!(!dir.join("nested").exists());
    assert_eq!(head_commit_id(dir), master_tip);
}

#[rstest]
fn untracked_file_in_the_way_blocks_checkout(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "g.txt", "other\n", "add g");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    std::fs::write(dir.join("g.txt"), "untracked\n").unwrap();

    run_gitlet_command(dir, &["checkout", "other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it or add it first.",
        ));
    assert_eq!(read_file(&dir.join("g.txt")), "untracked\n");
}

#[rstest]
#[case::current_branch("master", "No need to checkout the current branch.")]
#[case::unknown_branch("nope", "A branch with that name does not exist.")]
fn checkout_branch_failures(
    init_repository_dir: TempDir,
    #[case] branch: &str,
    #[case] message: &str,
) {
    run_gitlet_command(init_repository_dir.path(), &["checkout", branch])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(message));
}

#[rstest]
fn checkout_clears_the_staging_area(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    std::fs::write(dir.join("staged.txt"), "S\n").unwrap();
    run_gitlet_command(dir, &["add", "staged.txt"]).assert().success();

    run_gitlet_command(dir, &["checkout", "other"]).assert().success();

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
}
