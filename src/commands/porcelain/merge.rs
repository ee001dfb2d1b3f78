use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::MergeOutcome;
use crate::artifacts::merge::conflict::conflict_content;
use crate::artifacts::merge::resolution::{MergeAction, MergeRule};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Merge the branch `target` into the current branch.
    ///
    /// Preconditions are checked in order: the branch exists, nothing is
    /// staged, the branch is not the current one. Depending on where the split
    /// point lies the merge fast-forwards, does nothing, or creates a merge
    /// commit with the current tip as first parent and the target tip as
    /// second.
    pub fn merge(&mut self, target: &str) -> anyhow::Result<MergeOutcome> {
        let (target_branch, target_oid) = self.refs().find_branch(target)?;
        if !self.index().is_empty() {
            return Err(GitletError::UncommittedChanges.into());
        }
        if self.refs().is_current_branch(&target_branch) {
            return Err(GitletError::MergeWithSelf.into());
        }

        let head_oid = self.head_oid()?;
        let split_oid = self
            .commits()
            .split_point_finder()
            .find_split_point(&head_oid, &target_oid)?
            .ok_or_else(|| GitletError::NoSplitPoint {
                current: head_oid.to_string(),
                target: target_oid.to_string(),
            })?;

        if split_oid == head_oid {
            self.migrate_to(&target_oid)?;
            self.refs_mut().update_head(target_oid.clone());
            self.index_mut().clear();

            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(MergeOutcome::FastForwarded(target_oid));
        }

        if split_oid == target_oid {
            self.refs_mut().update_ref(target_branch, head_oid);

            writeln!(
                self.writer(),
                "Given branch is an ancestor of the current branch."
            )?;
            return Ok(MergeOutcome::AlreadyMerged);
        }

        {
            let current = self.head_commit()?.tracked();
            let target = self.commits().load(&target_oid)?.tracked();
            Migration::between(current, target).check_obstructions(self.workspace())?;
        }

        let conflicted = self.apply_three_way(&split_oid, &head_oid, &target_oid)?;
        if self.index().is_empty() {
            return Err(GitletError::NothingToCommit.into());
        }

        let message = format!(
            "Merged {} into {}.",
            target,
            self.refs().current_branch()
        );
        let commit = self.write_commit(vec![head_oid, target_oid], message)?;

        if conflicted {
            writeln!(self.writer(), "Encountered a merge conflict.")?;
        }

        Ok(MergeOutcome::Merged { commit, conflicted })
    }

    /// Classify and apply every path of the three commits, staging the results.
    ///
    /// Returns whether any path was conflicted.
    fn apply_three_way(
        &mut self,
        split_oid: &ObjectId,
        head_oid: &ObjectId,
        target_oid: &ObjectId,
    ) -> anyhow::Result<bool> {
        let split = self.commits().load(split_oid)?.tracked().clone();
        let current = self.commits().load(head_oid)?.tracked().clone();
        let target = self.commits().load(target_oid)?.tracked().clone();

        let paths = split
            .keys()
            .chain(current.keys())
            .chain(target.keys())
            .collect::<BTreeSet<_>>();

        let mut conflicted = false;
        for path in paths {
            let rule = MergeRule::classify(split.get(path), current.get(path), target.get(path));
            tracing::debug!(path = %path.display(), ?rule, "merge rule");

            match rule.action() {
                MergeAction::Keep => {}
                MergeAction::TakeTarget => {
                    if let Some(target_blob) = target.get(path) {
                        self.take_blob(path, target_blob)?;
                    }
                }
                MergeAction::Remove => {
                    self.workspace().remove_file(path)?;
                    self.index_mut().stage_removal(path.clone());
                }
                MergeAction::Conflict => {
                    let current_content = self.load_side(current.get(path))?;
                    let target_content = self.load_side(target.get(path))?;
                    let content =
                        conflict_content(current_content.as_deref(), target_content.as_deref());

                    let blob_oid = self.database().put(content)?;
                    self.take_blob(path, &blob_oid)?;
                    conflicted = true;
                }
            }
        }

        Ok(conflicted)
    }

    fn take_blob(&mut self, path: &Path, blob_oid: &ObjectId) -> anyhow::Result<()> {
        let content = self.database().get(blob_oid)?;
        self.workspace().write_file(path, &content)?;
        self.index_mut()
            .stage_addition(path.to_path_buf(), blob_oid.clone());

        Ok(())
    }

    fn load_side(&self, blob_oid: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        blob_oid.map(|oid| self.database().get(oid)).transpose()
    }
}
