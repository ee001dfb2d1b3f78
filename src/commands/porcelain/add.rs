use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use std::path::Path;

impl Repository {
    /// Stage the working copy of `file` for the next commit.
    ///
    /// Content identical to the current tip's is unstaged instead, and any
    /// pending removal of the path is cancelled either way.
    pub fn add(&mut self, file: &str) -> anyhow::Result<()> {
        let path = self.workspace().relative_path(Path::new(file))?;
        let blob = self.workspace().parse_blob(&path)?;
        let oid = blob.object_id()?;

        if self.head_commit()?.blob_for(&path) == Some(&oid) {
            let index = self.index_mut();
            index.unstage(&path);
            index.unstage_removal(&path);
            tracing::debug!(path = %path.display(), "content matches tip, nothing staged");
        } else {
            self.database().store(&blob)?;
            tracing::debug!(path = %path.display(), %oid, "staged for addition");
            self.index_mut().stage_addition(path, oid);
        }

        Ok(())
    }
}
