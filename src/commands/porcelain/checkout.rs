use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use std::path::Path;

impl Repository {
    /// Switch to `branch_name`, rewriting the working tree to its tip.
    pub fn checkout_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let (branch_name, target_oid) = self.refs().find_branch(branch_name)?;
        if self.refs().is_current_branch(&branch_name) {
            return Err(GitletError::NoOpCheckout.into());
        }

        self.migrate_to(&target_oid)?;
        self.refs_mut().set_current(branch_name)?;
        self.index_mut().clear();

        tracing::info!(branch = %self.refs().current_branch(), tip = %target_oid, "switched branch");
        Ok(())
    }

    /// Restore `file` as it is in the current tip.
    pub fn checkout_file(&mut self, file: &str) -> anyhow::Result<()> {
        let head = self.head_oid()?;
        self.restore_file(&head, file)
    }

    /// Restore `file` as it is in the commit named by `commit_prefix`.
    pub fn checkout_file_from_commit(
        &mut self,
        commit_prefix: &str,
        file: &str,
    ) -> anyhow::Result<()> {
        let commit_oid = self.commits().resolve_prefix(commit_prefix)?;
        self.restore_file(&commit_oid, file)
    }

    fn restore_file(&self, commit_oid: &ObjectId, file: &str) -> anyhow::Result<()> {
        let path = self.workspace().relative_path(Path::new(file))?;
        let blob_oid = self
            .commits()
            .load(commit_oid)?
            .blob_for(&path)
            .ok_or_else(|| GitletError::FileNotFoundInCommit(path.clone()))?;

        let content = self.database().get(blob_oid)?;
        self.workspace().write_file(&path, &content)?;

        tracing::debug!(path = %path.display(), commit = %commit_oid, "restored file");
        Ok(())
    }

    /// Rewrite the working tree from the current tip's files to `target_oid`'s.
    ///
    /// Refuses with [`GitletError::UntrackedObstruction`] before touching any
    /// file if an untracked file would be overwritten.
    pub(crate) fn migrate_to(&self, target_oid: &ObjectId) -> anyhow::Result<()> {
        let current = self.head_commit()?.tracked();
        let target = self.commits().load(target_oid)?.tracked();

        let migration = Migration::between(current, target);
        migration.check_obstructions(self.workspace())?;

        self.workspace().apply_migration(&migration, self.database())
    }
}
