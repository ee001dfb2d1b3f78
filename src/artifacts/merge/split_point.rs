//! Split point finder for merges
//!
//! The split point of two branch tips is the common ancestor a three-way merge
//! uses as its base. It is found in two phases:
//!
//! 1. Collect every ancestor of the target tip (the tip itself included) with a
//!    depth-first walk over all parents.
//! 2. Walk breadth-first from the current tip, enqueuing parents in order
//!    (first parent, then second), and return the first commit that belongs to
//!    the target's ancestor set.
//!
//! Distance is measured in parent hops from the current tip. On criss-cross
//! histories several ancestors may be equally close; the breadth-first order
//! decides which one wins.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let finder = SplitPointFinder::new(|oid| graph.parents_of(oid));
//! let split = finder.find_split_point(&head, &target)?;
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::{HashMap, HashSet, VecDeque};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const ANCESTOR_OF_TARGET = 0b01;
        const QUEUED_FROM_CURRENT = 0b10;
    }
}

/// Finds split points and ancestor sets over any commit storage
///
/// The loader returns the parent IDs of a commit; an empty list marks a root.
pub struct SplitPointFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    parents_loader: ParentsLoaderFn,
}

impl<ParentsLoaderFn> SplitPointFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    pub fn new(parents_loader: ParentsLoaderFn) -> Self {
        Self { parents_loader }
    }

    /// Every commit reachable from `tip` through any parent, `tip` included.
    pub fn ancestors(&self, tip: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut ancestors = HashSet::new();
        let mut stack = vec![tip.clone()];

        while let Some(commit_id) = stack.pop() {
            if !ancestors.insert(commit_id.clone()) {
                continue;
            }

            for parent_id in (self.parents_loader)(&commit_id)? {
                if !ancestors.contains(&parent_id) {
                    stack.push(parent_id);
                }
            }
        }

        Ok(ancestors)
    }

    /// Closest common ancestor of `current` and `target`, or `None` when the
    /// histories share no commit.
    pub fn find_split_point(
        &self,
        current: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut states = self
            .ancestors(target)?
            .into_iter()
            .map(|oid| (oid, VisitState::ANCESTOR_OF_TARGET))
            .collect::<HashMap<_, _>>();

        let mut queue = VecDeque::from([current.clone()]);
        states
            .entry(current.clone())
            .or_insert(VisitState::NONE)
            .insert(VisitState::QUEUED_FROM_CURRENT);

        while let Some(commit_id) = queue.pop_front() {
            let state = states.get(&commit_id).copied().unwrap_or(VisitState::NONE);
            if state.contains(VisitState::ANCESTOR_OF_TARGET) {
                tracing::debug!(current = %current, target = %target, split = %commit_id, "found split point");
                return Ok(Some(commit_id));
            }

            for parent_id in (self.parents_loader)(&commit_id)? {
                let parent_state = states.entry(parent_id.clone()).or_insert(VisitState::NONE);
                if !parent_state.contains(VisitState::QUEUED_FROM_CURRENT) {
                    parent_state.insert(VisitState::QUEUED_FROM_CURRENT);
                    queue.push_back(parent_id);
                }
            }
        }

        Ok(None)
    }
}
