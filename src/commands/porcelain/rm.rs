use crate::areas::repository::Repository;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Unstage `file`, and if the current tip tracks it, stage its removal and
    /// delete it from the working tree.
    ///
    /// A file that is neither staged nor tracked is reported, not an error.
    pub fn rm(&mut self, file: &str) -> anyhow::Result<()> {
        let path = self.workspace().relative_path(Path::new(file))?;

        let was_staged = self.index_mut().unstage(&path).is_some();
        let is_tracked = self.head_commit()?.tracks(&path);

        if is_tracked {
            self.index_mut().stage_removal(path.clone());
            self.workspace().remove_file(&path)?;
            tracing::debug!(path = %path.display(), "staged for removal");
        }

        if !was_staged && !is_tracked {
            writeln!(self.writer(), "No reason to remove the file.")?;
        }

        Ok(())
    }
}
