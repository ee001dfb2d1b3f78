use crate::areas::repository::Repository;
use crate::artifacts::merge::MergeOutcome;

impl Repository {
    /// Fetch `branch` from `remote_name`, then merge `<remote>/<branch>` into
    /// the current branch.
    pub fn pull(&mut self, remote_name: &str, branch: &str) -> anyhow::Result<MergeOutcome> {
        self.fetch(remote_name, branch)?;
        self.merge(&format!("{remote_name}/{branch}"))
    }
}
