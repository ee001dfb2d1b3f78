//! Staging area
//!
//! The index records what the next commit will change relative to the current
//! tip:
//!
//! - `additions`: paths whose content (by blob ID) will be tracked
//! - `removals`: tracked paths that will stop being tracked
//!
//! A path is never in both. Committing, checking out a branch and resetting
//! all leave the index empty.

use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    additions: BTreeMap<PathBuf, ObjectId>,
    removals: BTreeSet<PathBuf>,
}

impl Index {
    /// Stage `oid` as the new content of `path`, replacing any earlier staged
    /// content and cancelling a staged removal.
    pub fn stage_addition(&mut self, path: PathBuf, oid: ObjectId) {
        self.removals.remove(&path);
        self.additions.insert(path, oid);
    }

    /// Stage `path` for removal, dropping any staged addition for it.
    pub fn stage_removal(&mut self, path: PathBuf) {
        self.additions.remove(&path);
        self.removals.insert(path);
    }

    /// Drop a staged addition, returning the blob it pointed at.
    pub fn unstage(&mut self, path: &Path) -> Option<ObjectId> {
        self.additions.remove(path)
    }

    /// Drop a staged removal, returning whether there was one.
    pub fn unstage_removal(&mut self, path: &Path) -> bool {
        self.removals.remove(path)
    }

    pub fn addition(&self, path: &Path) -> Option<&ObjectId> {
        self.additions.get(path)
    }

    pub fn is_staged_for_addition(&self, path: &Path) -> bool {
        self.additions.contains_key(path)
    }

    pub fn is_staged_for_removal(&self, path: &Path) -> bool {
        self.removals.contains(path)
    }

    pub fn additions(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<PathBuf> {
        &self.removals
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn clear(&mut self) {
        self.additions.clear();
        self.removals.clear();
    }

    /// Tracked files of a commit made from `base` with this index applied.
    pub fn apply_to(&self, base: &TrackedFiles) -> TrackedFiles {
        let mut tracked = base.clone();
        tracked.extend(
            self.additions
                .iter()
                .map(|(path, oid)| (path.clone(), oid.clone())),
        );
        tracked.retain(|path, _| !self.removals.contains(path));

        tracked
    }
}
