//! Per-file three-way merge rules
//!
//! Every path tracked by the split point, the current tip or the target tip is
//! classified from its three blob IDs (absent when the commit does not track it).
//! A side "changed" the path when its blob differs from the split point's,
//! where absent-versus-present counts as a change.

use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Divergence: u8 {
        const NONE = 0b00;
        const CURRENT_CHANGED = 0b01;
        const TARGET_CHANGED = 0b10;
        const BOTH_CHANGED = Self::CURRENT_CHANGED.bits() | Self::TARGET_CHANGED.bits();
    }
}

/// Which rule decided the fate of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Neither side touched the path.
    Unchanged,
    /// Only the target changed the content; take the target's version.
    ModifiedInTarget,
    /// Only the target removed the path; remove it.
    RemovedInTarget,
    /// Only the current branch changed the path; keep it.
    ModifiedInCurrent,
    /// Both sides made the same change; keep it.
    ChangedIdentically,
    /// Both sides changed the path in different ways.
    Conflict,
}

/// What the merge does to the working tree and stage for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    Keep,
    TakeTarget,
    Remove,
    Conflict,
}

impl MergeRule {
    pub fn classify(
        split: Option<&ObjectId>,
        current: Option<&ObjectId>,
        target: Option<&ObjectId>,
    ) -> Self {
        let mut divergence = Divergence::NONE;
        if current != split {
            divergence |= Divergence::CURRENT_CHANGED;
        }
        if target != split {
            divergence |= Divergence::TARGET_CHANGED;
        }

        if divergence == Divergence::NONE {
            MergeRule::Unchanged
        } else if divergence == Divergence::TARGET_CHANGED {
            match target {
                Some(_) => MergeRule::ModifiedInTarget,
                None => MergeRule::RemovedInTarget,
            }
        } else if divergence == Divergence::CURRENT_CHANGED {
            MergeRule::ModifiedInCurrent
        } else if current == target {
            MergeRule::ChangedIdentically
        } else {
            MergeRule::Conflict
        }
    }

    pub fn action(&self) -> MergeAction {
        match self {
            MergeRule::Unchanged | MergeRule::ModifiedInCurrent | MergeRule::ChangedIdentically => {
                MergeAction::Keep
            }
            MergeRule::ModifiedInTarget => MergeAction::TakeTarget,
            MergeRule::RemovedInTarget => MergeAction::Remove,
            MergeRule::Conflict => MergeAction::Conflict,
        }
    }
}
