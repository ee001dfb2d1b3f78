use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::remote::transfer::Transfer;
use crate::errors::GitletError;

impl Repository {
    /// Send the current branch's history to `branch` of remote `remote_name`.
    ///
    /// Only fast-forwards are allowed: when the remote branch exists, its tip
    /// must be in the current tip's history, otherwise nothing is copied and
    /// [`GitletError::RemoteDiverged`] is returned. A missing remote branch is
    /// created.
    pub fn push(&mut self, remote_name: &str, branch: &str) -> anyhow::Result<()> {
        let mut remote = self.open_remote(remote_name)?;
        let branch = BranchName::try_parse(branch)?;
        let head = self.head_oid()?;

        if let Some(remote_tip) = remote.refs().read_ref(&branch) {
            if !self.commits().is_ancestor(remote_tip, &head)? {
                return Err(GitletError::RemoteDiverged.into());
            }
        }

        Transfer::new(self).copy_to(&mut remote, &head)?;
        remote.refs_mut().update_ref(branch, head);
        remote.persist()
    }
}
