use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;

impl Repository {
    /// Record the staged changes as a new commit on the current branch.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        if message.is_empty() {
            return Err(GitletError::EmptyCommitMessage.into());
        }
        if self.index().is_empty() {
            return Err(GitletError::NothingToCommit.into());
        }

        let head = self.head_oid()?;
        self.write_commit(vec![head], message.to_string())
    }

    /// Build a commit from the current tip's files plus the staged changes,
    /// advance the current branch to it and clear the index.
    pub(crate) fn write_commit(
        &mut self,
        parents: Vec<ObjectId>,
        message: String,
    ) -> anyhow::Result<ObjectId> {
        let tracked = self.index().apply_to(self.head_commit()?.tracked());
        let commit = Commit::new(parents, tracked, message, Commit::timestamp_from_env());

        let commit_id = self.commits_mut().insert(commit)?;
        self.refs_mut().update_head(commit_id.clone());
        self.index_mut().clear();

        tracing::info!(oid = %commit_id, branch = %self.refs().current_branch(), "created commit");

        Ok(commit_id)
    }
}
