//! Working-tree migration between two commits
//!
//! Moving the working tree from one commit's tracked files to another's is
//! planned up front:
//!
//! 1. Every file tracked by the target is (re)written from its blob.
//! 2. Every file tracked by the current commit but not the target is deleted.
//!
//! ## Obstructions
//!
//! A path tracked by the target but not by the current commit is obstructed
//! when the migration would have to overwrite untracked work to create it:
//!
//! - a file or link already sits at the path
//! - a directory sits at the path and would still hold something once the
//!   deletions ran
//! - one of its parent directories is a file or link the migration keeps
//!
//! The whole migration is refused before anything is touched when any path is
//! obstructed.

use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Migration {
    /// Files to write, with the blob they receive
    writes: BTreeMap<PathBuf, ObjectId>,
    /// Files to delete
    deletions: BTreeSet<PathBuf>,
    /// Written files the current commit does not track
    incoming: BTreeSet<PathBuf>,
}

impl Migration {
    pub fn between(current: &TrackedFiles, target: &TrackedFiles) -> Self {
        let deletions = current
            .keys()
            .filter(|path| !target.contains_key(*path))
            .cloned()
            .collect();
        let incoming = target
            .keys()
            .filter(|path| !current.contains_key(*path))
            .cloned()
            .collect();

        Migration {
            writes: target.clone(),
            deletions,
            incoming,
        }
    }

    /// Fail with [`GitletError::UntrackedObstruction`] for the first untracked
    /// entry on disk the migration would overwrite.
    pub fn check_obstructions(&self, workspace: &Workspace) -> anyhow::Result<()> {
        match self
            .incoming
            .iter()
            .find(|path| self.is_obstructed(workspace, path))
        {
            Some(path) => {
                tracing::debug!(path = %path.display(), "untracked file blocks migration");
                Err(GitletError::UntrackedObstruction(path.clone()).into())
            }
            None => Ok(()),
        }
    }

    fn is_obstructed(&self, workspace: &Workspace, path: &Path) -> bool {
        let blocked_parent = path
            .ancestors()
            .skip(1)
            .filter(|parent| !parent.as_os_str().is_empty())
            .any(|parent| {
                workspace.entry_exists(parent)
                    && !workspace.is_dir(parent)
                    && !self.deletions.contains(parent)
            });
        if blocked_parent {
            return true;
        }

        if !workspace.entry_exists(path) {
            return false;
        }
        if !workspace.is_dir(path) {
            return true;
        }

        // deleting the last file below a directory prunes it
        let emptied = self.deletions.iter().any(|deleted| deleted.starts_with(path));
        !emptied
            || workspace
                .entries_below(path)
                .into_iter()
                .any(|(entry, is_dir)| {
                    if is_dir {
                        !self.deletions.iter().any(|deleted| deleted.starts_with(&entry))
                    } else {
                        !self.deletions.contains(&entry)
                    }
                })
    }

    pub fn writes(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.writes
    }

    pub fn deletions(&self) -> &BTreeSet<PathBuf> {
        &self.deletions
    }
}
