use crate::areas::repository::Repository;
use crate::areas::snapshot::Snapshot;
use crate::areas::{GITLET_DIR, OBJECTS_DIR, SNAPSHOT_FILE};
use crate::errors::GitletError;
use anyhow::Context;
use std::fs;
use std::path::Path;

impl Repository {
    /// Create a repository rooted at `path` and open it.
    ///
    /// The new repository holds only the initial commit, with `master` as the
    /// current branch. Fails with [`GitletError::AlreadyInitialized`] if
    /// `path` already has a `.gitlet` directory.
    pub fn init(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let gitlet_path = path.join(GITLET_DIR);
        if gitlet_path.exists() {
            return Err(GitletError::AlreadyInitialized.into());
        }

        fs::create_dir_all(gitlet_path.join(OBJECTS_DIR))
            .context("Failed to create .gitlet/objects directory")?;

        Snapshot::initial()?
            .persist(&gitlet_path.join(SNAPSHOT_FILE))
            .context("Failed to write initial repository state")?;

        tracing::info!(path = %path.display(), "initialized repository");

        Self::open(path, writer)
    }
}
