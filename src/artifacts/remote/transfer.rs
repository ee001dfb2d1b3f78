//! Commit and blob transfer
//!
//! Copies every commit reachable from a tip (through all parents) that the
//! destination does not have yet, together with the blobs those commits track.
//! The walk stops at commits the destination already holds, since everything
//! behind them is present too.
//!
//! Blobs are copied before the commits that reference them, so a transfer
//! interrupted halfway leaves extra blobs behind but never a commit with
//! missing content.

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// What a transfer copied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferStats {
    pub commits: usize,
    pub blobs: usize,
}

pub struct Transfer<'s> {
    source: &'s Repository,
}

impl<'s> Transfer<'s> {
    pub fn new(source: &'s Repository) -> Self {
        Transfer { source }
    }

    /// Copy `tip` and its missing ancestry into `destination`.
    pub fn copy_to(
        &self,
        destination: &mut Repository,
        tip: &ObjectId,
    ) -> anyhow::Result<TransferStats> {
        let missing = self.missing_commits(destination, tip)?;
        let mut stats = TransferStats::default();

        for (_, commit) in &missing {
            for blob_oid in commit.tracked().values() {
                if destination.database().exists(blob_oid) {
                    continue;
                }

                let content = self.source.database().get(blob_oid)?;
                destination.database().put(content)?;
                stats.blobs += 1;
            }
        }

        for (oid, commit) in missing {
            let copied = destination.commits_mut().insert(commit)?;
            anyhow::ensure!(
                copied == oid,
                "commit {oid} changed its digest to {copied} in transit"
            );
            stats.commits += 1;
        }

        tracing::info!(
            tip = %tip,
            commits = stats.commits,
            blobs = stats.blobs,
            "transferred objects"
        );

        Ok(stats)
    }

    fn missing_commits(
        &self,
        destination: &Repository,
        tip: &ObjectId,
    ) -> anyhow::Result<Vec<(ObjectId, Commit)>> {
        let mut missing = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![tip.clone()];

        while let Some(oid) = stack.pop() {
            if destination.commits().contains(&oid) || !seen.insert(oid.clone()) {
                continue;
            }

            let commit = self.source.commits().load(&oid)?;
            stack.extend(commit.parents().iter().cloned());
            missing.push((oid, commit.clone()));
        }

        Ok(missing)
    }
}
