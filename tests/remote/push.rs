use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, log_commit_ids, run_gitlet_command,
    run_stdout,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;
use std::path::Path;

fn add_origin(local: &Path, remote: &Path) {
    let remote_gitlet = remote.join(".gitlet");
    run_gitlet_command(local, &["add-remote", "origin", remote_gitlet.to_str().unwrap()])
        .assert()
        .success();
}

fn init_remote() -> TempDir {
    let remote = TempDir::new().unwrap();
    run_gitlet_command(remote.path(), &["init"]).assert().success();
    remote
}

#[rstest]
fn push_fast_forwards_the_remote_branch(init_repository_dir: TempDir) {
    let local = init_repository_dir.path();
    commit_file(local, "g.txt", "G\n", "second");
    let remote = init_remote();
    add_origin(local, remote.path());

    run_gitlet_command(local, &["push", "origin", "master"])
        .assert()
        .success();

    assert_eq!(log_commit_ids(remote.path()), log_commit_ids(local));
}

#[rstest]
fn push_creates_a_missing_remote_branch(init_repository_dir: TempDir) {
    let local = init_repository_dir.path();
    let remote = init_remote();
    add_origin(local, remote.path());

    run_gitlet_command(local, &["push", "origin", "feature"])
        .assert()
        .success();

    run_gitlet_command(remote.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Branches ===\nfeature\n*master\n"));
    assert!(!run_stdout(remote.path(), &["find", "first"]).contains("Found no commit"));
}

#[rstest]
fn diverged_push_leaves_the_remote_untouched(init_repository_dir: TempDir) {
    let local = init_repository_dir.path();
    let remote = init_remote();
    commit_file(remote.path(), "r.txt", "remote\n", "remote work");
    let remote_tip = head_commit_id(remote.path());
    let remote_global_log = run_stdout(remote.path(), &["global-log"]);
    add_origin(local, remote.path());

    run_gitlet_command(local, &["push", "origin", "master"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Please pull down remote changes before pushing.",
        ));

    assert_eq!(head_commit_id(remote.path()), remote_tip);
    assert_eq!(run_stdout(remote.path(), &["global-log"]), remote_global_log);
}

#[rstest]
fn push_to_a_missing_remote_directory_fails(init_repository_dir: TempDir) {
    let local = init_repository_dir.path();
    let nowhere = TempDir::new().unwrap();
    add_origin(local, nowhere.path());

    run_gitlet_command(local, &["push", "origin", "master"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Remote directory not found."));
}

#[rstest]
fn remote_registry_rejects_duplicates_and_unknown_names(init_repository_dir: TempDir) {
    let local = init_repository_dir.path();
    let remote = init_remote();
    add_origin(local, remote.path());

    run_gitlet_command(local, &["add-remote", "origin", "elsewhere/.gitlet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A remote with that name already exists.",
        ));

    run_gitlet_command(local, &["rm-remote", "origin"])
        .assert()
        .success();
    run_gitlet_command(local, &["rm-remote", "origin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A remote with that name does not exist.",
        ));
}
