//! Commit graph
//!
//! Every commit the repository knows about, keyed by its digest. Commits are
//! inserted once and never modified or deleted; parents are referenced by ID
//! and resolved through this table.

use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitGraph {
    commits: BTreeMap<ObjectId, Commit>,
}

impl CommitGraph {
    /// Add `commit` under its digest and return the digest.
    ///
    /// Inserting a commit that is already present is a no-op.
    pub fn insert(&mut self, commit: Commit) -> anyhow::Result<ObjectId> {
        let oid = commit.object_id()?;
        self.commits.entry(oid.clone()).or_insert(commit);

        Ok(oid)
    }

    pub fn get(&self, oid: &ObjectId) -> Option<&Commit> {
        self.commits.get(oid)
    }

    /// Like [`CommitGraph::get`], but an unknown ID is a [`GitletError::CommitNotFound`].
    pub fn load(&self, oid: &ObjectId) -> anyhow::Result<&Commit> {
        self.commits
            .get(oid)
            .ok_or_else(|| GitletError::CommitNotFound(oid.to_string()).into())
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.commits.contains_key(oid)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &Commit)> {
        self.commits.iter()
    }

    pub fn parents_of(&self, oid: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self.load(oid)?.parents().to_vec())
    }

    pub fn split_point_finder(
        &self,
    ) -> SplitPointFinder<impl Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>> + '_> {
        SplitPointFinder::new(|oid| self.parents_of(oid))
    }

    pub fn ancestors_of(&self, tip: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        self.split_point_finder().ancestors(tip)
    }

    pub fn is_ancestor(&self, ancestor: &ObjectId, descendant: &ObjectId) -> anyhow::Result<bool> {
        Ok(self.ancestors_of(descendant)?.contains(ancestor))
    }

    /// Commits from `tip` back to the root, following first parents only.
    pub fn first_parent_history<'g>(&'g self, tip: &ObjectId) -> FirstParentHistory<'g> {
        FirstParentHistory {
            graph: self,
            next: Some(tip.clone()),
        }
    }

    /// IDs of every commit whose message equals `message` exactly.
    pub fn find_by_message(&self, message: &str) -> Vec<&ObjectId> {
        self.commits
            .iter()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(oid, _)| oid)
            .collect()
    }

    /// Resolve a full or abbreviated commit ID.
    ///
    /// A full-length ID must name a known commit. A shorter prefix must match
    /// exactly one commit; several matches yield [`GitletError::AmbiguousCommit`].
    pub fn resolve_prefix(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        let prefix = prefix.to_lowercase();
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GitletError::CommitNotFound(prefix).into());
        }

        if prefix.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(prefix)?;
            return self.load(&oid).map(|_| oid);
        }

        let candidates = self
            .commits
            .keys()
            .filter(|oid| oid.starts_with(&prefix))
            .collect::<Vec<_>>();

        match candidates.as_slice() {
            [] => Err(GitletError::CommitNotFound(prefix).into()),
            [oid] => Ok((*oid).clone()),
            _ => Err(GitletError::AmbiguousCommit {
                candidates: candidates.len(),
                prefix,
            }
            .into()),
        }
    }
}

/// Iterator over a first-parent chain
///
/// Stops early (after yielding an error) when a commit on the chain is missing.
pub struct FirstParentHistory<'g> {
    graph: &'g CommitGraph,
    next: Option<ObjectId>,
}

impl<'g> Iterator for FirstParentHistory<'g> {
    type Item = anyhow::Result<(ObjectId, &'g Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next.take()?;

        match self.graph.load(&oid) {
            Ok(commit) => {
                // history ends at the initial commit
                self.next = if commit.is_initial() {
                    None
                } else {
                    commit.parent().cloned()
                };
                Some(Ok((oid, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
