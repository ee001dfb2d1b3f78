//! Merge machinery
//!
//! - `split_point`: closest common ancestor of two branch tips
//! - `resolution`: per-file three-way rules
//! - `conflict`: content written for conflicted files

pub mod conflict;
pub mod resolution;
pub mod split_point;

use crate::artifacts::objects::object_id::ObjectId;

/// How a merge finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The target was already contained in the current branch; the target
    /// branch was moved to the current tip.
    AlreadyMerged,
    /// The current branch was an ancestor of the target and now points at it.
    FastForwarded(ObjectId),
    /// A merge commit was created; `conflicted` reports whether any file
    /// received conflict markers.
    Merged { commit: ObjectId, conflicted: bool },
}
