use crate::areas::database::Database;
use crate::areas::graph::CommitGraph;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::remotes::Remotes;
use crate::areas::snapshot::Snapshot;
use crate::areas::workspace::Workspace;
use crate::areas::{GITLET_DIR, OBJECTS_DIR, SNAPSHOT_FILE};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// An opened repository
///
/// Holds the in-memory snapshot for the duration of one command. Nothing is
/// written back until [`Repository::persist`] is called, except blobs, which
/// are immutable and stored as soon as they are staged.
pub struct Repository {
    path: Box<Path>,
    gitlet_path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    snapshot: Snapshot,
}

impl Repository {
    /// Open the repository whose working tree is rooted at `path`.
    ///
    /// Fails with [`GitletError::NotInitialized`] when `path` holds no repository.
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;
        let gitlet_path = path.join(GITLET_DIR);

        if !gitlet_path.join(SNAPSHOT_FILE).is_file() {
            return Err(GitletError::NotInitialized.into());
        }

        Self::assemble(path.into_boxed_path(), gitlet_path.into_boxed_path(), writer)
    }

    /// Open a repository through its `.gitlet` directory, as remotes are named.
    ///
    /// Fails with [`GitletError::RemoteDirectoryNotFound`] when the directory
    /// does not hold a repository.
    pub fn open_gitlet_dir(
        gitlet_path: &Path,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        if !gitlet_path.join(SNAPSHOT_FILE).is_file() {
            return Err(GitletError::RemoteDirectoryNotFound(gitlet_path.to_path_buf()).into());
        }

        let gitlet_path = gitlet_path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", gitlet_path.display()))?;
        let path = gitlet_path
            .parent()
            .with_context(|| format!("{} has no working tree", gitlet_path.display()))?
            .to_path_buf();

        Self::assemble(path.into_boxed_path(), gitlet_path.into_boxed_path(), writer)
    }

    fn assemble(
        path: Box<Path>,
        gitlet_path: Box<Path>,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let snapshot = Snapshot::load(&gitlet_path.join(SNAPSHOT_FILE))?;
        let database = Database::new(gitlet_path.join(OBJECTS_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone());

        tracing::debug!(path = %path.display(), "opened repository");

        Ok(Repository {
            path,
            gitlet_path,
            writer: RefCell::new(writer),
            database,
            workspace,
            snapshot,
        })
    }

    /// Write the snapshot back to disk.
    pub fn persist(&self) -> anyhow::Result<()> {
        self.snapshot.persist(&self.gitlet_path.join(SNAPSHOT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlet_path(&self) -> &Path {
        &self.gitlet_path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn commits(&self) -> &CommitGraph {
        self.snapshot.commits()
    }

    pub fn commits_mut(&mut self) -> &mut CommitGraph {
        self.snapshot.commits_mut()
    }

    pub fn refs(&self) -> &Refs {
        self.snapshot.refs()
    }

    pub fn refs_mut(&mut self) -> &mut Refs {
        self.snapshot.refs_mut()
    }

    pub fn index(&self) -> &Index {
        self.snapshot.index()
    }

    pub fn index_mut(&mut self) -> &mut Index {
        self.snapshot.index_mut()
    }

    pub fn remotes(&self) -> &Remotes {
        self.snapshot.remotes()
    }

    pub fn remotes_mut(&mut self) -> &mut Remotes {
        self.snapshot.remotes_mut()
    }

    /// ID of the current branch's tip
    pub fn head_oid(&self) -> anyhow::Result<ObjectId> {
        self.refs().read_head().cloned()
    }

    pub fn head_commit(&self) -> anyhow::Result<&Commit> {
        let head = self.refs().read_head()?;
        self.commits().load(head)
    }
}
