use crate::areas::repository::Repository;

impl Repository {
    /// Move the current branch to the commit named by `commit_prefix` and make
    /// the working tree match it. The index is cleared.
    pub fn reset(&mut self, commit_prefix: &str) -> anyhow::Result<()> {
        let target_oid = self.commits().resolve_prefix(commit_prefix)?;

        self.migrate_to(&target_oid)?;
        self.refs_mut().update_head(target_oid.clone());
        self.index_mut().clear();

        tracing::info!(branch = %self.refs().current_branch(), tip = %target_oid, "reset branch");
        Ok(())
    }
}
