//! Branch table
//!
//! Maps branch names to their tip commits and remembers which branch is
//! current. The current branch always names an existing entry; it cannot be
//! deleted and switching to an unknown branch fails.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refs {
    current: BranchName,
    branches: BTreeMap<BranchName, ObjectId>,
}

impl Refs {
    /// A table holding only `current`, pointing at `tip`.
    pub fn new(current: BranchName, tip: ObjectId) -> Self {
        Refs {
            branches: BTreeMap::from([(current.clone(), tip)]),
            current,
        }
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current
    }

    pub fn is_current_branch(&self, name: &BranchName) -> bool {
        &self.current == name
    }

    /// Tip of the current branch
    pub fn read_head(&self) -> anyhow::Result<&ObjectId> {
        self.branches
            .get(&self.current)
            .with_context(|| format!("current branch {} has no tip", self.current))
    }

    /// Move the current branch to `oid`.
    pub fn update_head(&mut self, oid: ObjectId) {
        self.branches.insert(self.current.clone(), oid);
    }

    pub fn read_ref(&self, name: &BranchName) -> Option<&ObjectId> {
        self.branches.get(name)
    }

    /// Look up a branch by user-supplied name.
    ///
    /// Names that are not even valid branch names cannot exist, so both cases
    /// fail with [`GitletError::BranchNotFound`].
    pub fn find_branch(&self, name: &str) -> anyhow::Result<(BranchName, ObjectId)> {
        BranchName::try_parse(name)
            .ok()
            .and_then(|branch| {
                let tip = self.branches.get(&branch)?.clone();
                Some((branch, tip))
            })
            .ok_or_else(|| GitletError::BranchNotFound(name.to_string()).into())
    }

    pub fn exists(&self, name: &BranchName) -> bool {
        self.branches.contains_key(name)
    }

    pub fn create_branch(&mut self, name: BranchName, oid: ObjectId) -> anyhow::Result<()> {
        if self.branches.contains_key(&name) {
            return Err(GitletError::BranchExists(name.to_string()).into());
        }

        tracing::debug!(branch = %name, tip = %oid, "created branch");
        self.branches.insert(name, oid);
        Ok(())
    }

    /// Create `name` or move it to `oid`.
    pub fn update_ref(&mut self, name: BranchName, oid: ObjectId) {
        tracing::debug!(branch = %name, tip = %oid, "updated branch");
        self.branches.insert(name, oid);
    }

    /// Delete a branch that is not current and return its last tip.
    pub fn delete_branch(&mut self, name: &BranchName) -> anyhow::Result<ObjectId> {
        if !self.branches.contains_key(name) {
            return Err(GitletError::BranchNotFound(name.to_string()).into());
        }
        if self.is_current_branch(name) {
            return Err(GitletError::CannotRemoveCurrent.into());
        }

        self.branches
            .remove(name)
            .with_context(|| format!("branch {name} vanished while deleting it"))
    }

    /// Make `name` the current branch.
    pub fn set_current(&mut self, name: BranchName) -> anyhow::Result<()> {
        if !self.branches.contains_key(&name) {
            return Err(GitletError::BranchNotFound(name.to_string()).into());
        }

        self.current = name;
        Ok(())
    }

    /// Branch names in ascending order with their tips
    pub fn list_branches(&self) -> impl Iterator<Item = (&BranchName, &ObjectId)> {
        self.branches.iter()
    }
}
