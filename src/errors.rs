//! Error types for repository operations.
//!
//! Every command returns `anyhow::Result`. Failures that a user can trigger are raised
//! as [`GitletError`] values so the front end (and tests) can recover the kind with
//! `error.downcast_ref::<GitletError>()`. Plain I/O failures stay as context-wrapped
//! `anyhow` errors.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`GitletError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An object, commit, branch, remote or file is absent.
    NotFound,
    /// A branch, remote or repository with that name already exists.
    AlreadyExists,
    /// The request makes no sense in the current repository state.
    InvalidOperation,
    /// An untracked working file blocks the operation.
    Obstruction,
    /// A push would not be a fast-forward of the remote branch.
    Diverged,
    /// The caller supplied unusable input.
    MalformedInput,
}

#[derive(Error, Debug)]
pub enum GitletError {
    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Object {0} does not exist.")]
    ObjectNotFound(String),

    #[error("Object {expected} is corrupted (content hashes to {actual}).")]
    CorruptedObject { expected: String, actual: String },

    #[error("File does not exist.")]
    FileNotFound(PathBuf),

    #[error("File is outside the repository.")]
    PathOutsideRepository(PathBuf),

    #[error("No commit with that id exists.")]
    CommitNotFound(String),

    #[error("Commit id {prefix} is ambiguous: {candidates} commits match.")]
    AmbiguousCommit { prefix: String, candidates: usize },

    #[error("File does not exist in that commit.")]
    FileNotFoundInCommit(PathBuf),

    #[error("A branch with that name does not exist.")]
    BranchNotFound(String),

    #[error("A branch with that name already exists.")]
    BranchExists(String),

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrent,

    #[error("No need to checkout the current branch.")]
    NoOpCheckout,

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,

    #[error("No split point found between {current} and {target}.")]
    NoSplitPoint { current: String, target: String },

    #[error("There is an untracked file in the way; delete it or add it first.")]
    UntrackedObstruction(PathBuf),

    #[error("A remote with that name already exists.")]
    RemoteExists(String),

    #[error("A remote with that name does not exist.")]
    RemoteNotFound(String),

    #[error("Remote directory not found.")]
    RemoteDirectoryNotFound(PathBuf),

    #[error("That remote does not have that branch.")]
    RemoteBranchNotFound(String),

    #[error("Please pull down remote changes before pushing.")]
    RemoteDiverged,
}

impl GitletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GitletError::NotInitialized
            | GitletError::ObjectNotFound(_)
            | GitletError::FileNotFound(_)
            | GitletError::CommitNotFound(_)
            | GitletError::AmbiguousCommit { .. }
            | GitletError::FileNotFoundInCommit(_)
            | GitletError::BranchNotFound(_)
            | GitletError::NoSplitPoint { .. }
            | GitletError::RemoteNotFound(_)
            | GitletError::RemoteDirectoryNotFound(_)
            | GitletError::RemoteBranchNotFound(_) => ErrorKind::NotFound,
            GitletError::AlreadyInitialized
            | GitletError::BranchExists(_)
            | GitletError::RemoteExists(_) => ErrorKind::AlreadyExists,
            GitletError::CannotRemoveCurrent
            | GitletError::NoOpCheckout
            | GitletError::NothingToCommit
            | GitletError::UncommittedChanges
            | GitletError::MergeWithSelf => ErrorKind::InvalidOperation,
            GitletError::UntrackedObstruction(_) => ErrorKind::Obstruction,
            GitletError::RemoteDiverged => ErrorKind::Diverged,
            GitletError::CorruptedObject { .. }
            | GitletError::InvalidBranchName(_)
            | GitletError::PathOutsideRepository(_)
            | GitletError::EmptyCommitMessage => ErrorKind::MalformedInput,
        }
    }
}

/// Extract the [`ErrorKind`] of an `anyhow` error raised by a repository operation.
///
/// Returns `None` for failures that did not originate as a [`GitletError`]
/// (I/O errors, corrupted snapshots, ...).
pub fn kind_of(error: &anyhow::Error) -> Option<ErrorKind> {
    error.downcast_ref::<GitletError>().map(GitletError::kind)
}
