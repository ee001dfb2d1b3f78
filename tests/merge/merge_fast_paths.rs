use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, log_commit_ids, run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn merging_a_descendant_fast_forwards(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "feature"]).assert().success();
    run_gitlet_command(dir, &["checkout", "feature"]).assert().success();
    commit_file(dir, "f.txt", "feature\n", "feature work");
    commit_file(dir, "g.txt", "G\n", "more feature work");
    let feature_tip = head_commit_id(dir);
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    run_gitlet_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Current branch fast-forwarded.\n"));

    assert_eq!(head_commit_id(dir), feature_tip);
    assert_eq!(read_file(&dir.join("f.txt")), "feature\n");
    assert_eq!(read_file(&dir.join("g.txt")), "G\n");
    // no merge commit
    assert_eq!(log_commit_ids(dir).len(), 4);
}

#[rstest]
fn merging_an_ancestor_makes_no_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "old"]).assert().success();
    commit_file(dir, "f.txt", "newer\n", "newer work");
    let master_tip = head_commit_id(dir);

    run_gitlet_command(dir, &["merge", "old"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Given branch is an ancestor of the current branch.\n",
        ));

    assert_eq!(head_commit_id(dir), master_tip);
    assert_eq!(read_file(&dir.join("f.txt")), "newer\n");

    // the ancestor branch was advanced to the current tip
    run_gitlet_command(dir, &["checkout", "old"]).assert().success();
    assert_eq!(head_commit_id(dir), master_tip);
}
