use crate::areas::repository::Repository;
use std::path::PathBuf;

impl Repository {
    /// Remember `path` (another repository's `.gitlet` directory) as `name`.
    pub fn add_remote(&mut self, name: &str, path: &str) -> anyhow::Result<()> {
        self.remotes_mut().add(name, PathBuf::from(path))
    }

    pub fn rm_remote(&mut self, name: &str) -> anyhow::Result<()> {
        self.remotes_mut().remove(name)?;
        Ok(())
    }

    /// Open the repository configured as remote `name`.
    ///
    /// Relative remote paths are resolved against this working tree's root.
    pub(crate) fn open_remote(&self, name: &str) -> anyhow::Result<Repository> {
        let configured = self.remotes().get(name)?;
        let gitlet_path = if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.path().join(configured)
        };

        tracing::debug!(remote = name, path = %gitlet_path.display(), "opening remote");
        Repository::open_gitlet_dir(&gitlet_path, Box::new(std::io::sink()))
    }
}
