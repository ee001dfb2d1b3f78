use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::remote::transfer::Transfer;
use crate::errors::GitletError;

impl Repository {
    /// Copy `branch` of remote `remote_name` into this repository and point the
    /// local `<remote>/<branch>` branch at its tip.
    pub fn fetch(&mut self, remote_name: &str, branch: &str) -> anyhow::Result<ObjectId> {
        let remote = self.open_remote(remote_name)?;

        let (branch, remote_tip) = remote
            .refs()
            .find_branch(branch)
            .map_err(|_| GitletError::RemoteBranchNotFound(branch.to_string()))?;

        Transfer::new(&remote).copy_to(self, &remote_tip)?;

        let tracking_branch = BranchName::remote_tracking(remote_name, &branch)?;
        self.refs_mut()
            .update_ref(tracking_branch, remote_tip.clone());

        Ok(remote_tip)
    }
}
