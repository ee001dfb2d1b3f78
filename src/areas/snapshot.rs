//! Persistent repository state
//!
//! Everything except blob contents lives in one JSON document,
//! `.gitlet/repository.json`: the commit graph, the branch table, the staging
//! area and the remotes. A command loads it once, works on the in-memory copy
//! and writes it back on success.
//!
//! ## Locking
//!
//! The snapshot itself is replaced by rename on every write, so locks are
//! taken on a stable sibling, `repository.lock`. Reading holds it shared.
//! Writing holds it exclusive while the document goes to a temporary file
//! that is then renamed over the snapshot, so readers never observe a
//! half-written document.

use crate::areas::graph::CommitGraph;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::remotes::Remotes;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use fake::rand;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Sibling of the snapshot that readers and writers lock
pub const LOCK_FILE: &str = "repository.lock";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    commits: CommitGraph,
    refs: Refs,
    #[serde(default)]
    index: Index,
    #[serde(default)]
    remotes: Remotes,
}

impl Snapshot {
    /// State of a freshly initialized repository: the shared initial commit on
    /// the default branch, nothing staged, no remotes.
    pub fn initial() -> anyhow::Result<Self> {
        let mut commits = CommitGraph::default();
        let root = commits.insert(Commit::initial())?;

        Ok(Snapshot {
            commits,
            refs: Refs::new(BranchName::default(), root),
            index: Index::default(),
            remotes: Remotes::default(),
        })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut lock_file = Self::open_lock_file(path)?;
        let _lock = file_guard::lock(&mut lock_file, file_guard::Lock::Shared, 0, 1)?;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read snapshot {}", path.display()))?;

        let snapshot = serde_json::from_str::<Snapshot>(&content)
            .with_context(|| format!("Corrupted snapshot {}", path.display()))?;
        tracing::trace!(
            path = %path.display(),
            commits = snapshot.commits.len(),
            "loaded snapshot"
        );

        Ok(snapshot)
    }

    pub fn persist(&self, path: &Path) -> anyhow::Result<()> {
        let content =
            serde_json::to_vec_pretty(self).context("Unable to serialize repository state")?;

        let parent = path
            .parent()
            .with_context(|| format!("Invalid snapshot path {}", path.display()))?;
        let temp_path = parent.join(Self::generate_temp_name());

        let mut lock_file = Self::open_lock_file(path)?;
        let _lock = file_guard::lock(&mut lock_file, file_guard::Lock::Exclusive, 0, 1)?;

        {
            let mut temp_file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Unable to open {}", temp_path.display()))?;

            temp_file
                .write_all(&content)
                .with_context(|| format!("Unable to write {}", temp_path.display()))?;
            temp_file.sync_all()?;
        }

        // rename the temp file over the snapshot to make the update atomic
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Unable to replace snapshot {}", path.display()))?;
        tracing::trace!(path = %path.display(), "persisted snapshot");

        Ok(())
    }

    pub fn commits(&self) -> &CommitGraph {
        &self.commits
    }

    pub fn commits_mut(&mut self) -> &mut CommitGraph {
        &mut self.commits
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn refs_mut(&mut self) -> &mut Refs {
        &mut self.refs
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn remotes(&self) -> &Remotes {
        &self.remotes
    }

    pub fn remotes_mut(&mut self) -> &mut Remotes {
        &mut self.remotes
    }

    /// Open (creating it on first use) the lock file guarding the snapshot at `path`.
    fn open_lock_file(path: &Path) -> anyhow::Result<std::fs::File> {
        let lock_path = path.with_file_name(LOCK_FILE);

        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Unable to open lock file {}", lock_path.display()))
    }

    fn generate_temp_name() -> String {
        format!("tmp-snapshot-{}", rand::random::<u32>())
    }
}
