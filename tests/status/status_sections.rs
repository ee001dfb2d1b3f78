use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command, run_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn clean_repository_prints_empty_sections(init_repository_dir: TempDir) {
    let status = run_stdout(init_repository_dir.path(), &["status"]);

    assert_eq!(
        status,
        "=== Branches ===\n*master\n\n\
         === Staged Files ===\n\n\
         === Removed Files ===\n\n\
         === Modifications Not Staged For Commit ===\n\n\
         === Untracked Files ===\n\n"
    );
}

#[rstest]
fn every_section_is_populated(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "tracked_modified.txt", "T\n", "more");
    commit_file(dir, "tracked_deleted.txt", "D\n", "even more");
    run_gitlet_command(dir, &["branch", "dev"]).assert().success();

    std::fs::write(dir.join("staged.txt"), "S\n").unwrap();
    run_gitlet_command(dir, &["add", "staged.txt"]).assert().success();
    run_gitlet_command(dir, &["rm", "f.txt"]).assert().success();
    std::fs::write(dir.join("tracked_modified.txt"), "changed\n").unwrap();
    std::fs::remove_file(dir.join("tracked_deleted.txt")).unwrap();
    std::fs::write(dir.join("untracked.txt"), "U\n").unwrap();

    let status = run_stdout(dir, &["status"]);

    assert_eq!(
        status,
        "=== Branches ===\ndev\n*master\n\n\
         === Staged Files ===\nstaged.txt\n\n\
         === Removed Files ===\nf.txt\n\n\
         === Modifications Not Staged For Commit ===\n\
         tracked_deleted.txt (deleted)\n\
         tracked_modified.txt (modified)\n\n\
         === Untracked Files ===\nuntracked.txt\n\n"
    );
}

#[rstest]
fn staged_file_edited_afterwards_is_reported_modified(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("f.txt"), "staged\n").unwrap();
    run_gitlet_command(dir, &["add", "f.txt"]).assert().success();
    std::fs::write(dir.join("f.txt"), "edited again\n").unwrap();

    let status = run_stdout(dir, &["status"]);

    assert!(status.contains("=== Staged Files ===\nf.txt\n\n"));
    assert!(status.contains("=== Modifications Not Staged For Commit ===\nf.txt (modified)\n\n"));
}
