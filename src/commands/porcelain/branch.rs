use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;

impl Repository {
    /// Create a branch pointing at the current tip. The current branch does
    /// not change.
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name)?;
        let head = self.head_oid()?;

        self.refs_mut().create_branch(branch_name, head)
    }

    /// Delete a branch pointer. Commits it pointed at are kept.
    pub fn rm_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let (branch_name, _) = self.refs().find_branch(branch_name)?;

        self.refs_mut().delete_branch(&branch_name)?;
        Ok(())
    }
}
