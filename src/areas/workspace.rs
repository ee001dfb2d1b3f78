//! Working directory access
//!
//! All paths handed to and returned from the workspace are relative to the
//! working-tree root. The `.gitlet` directory is never listed.

use crate::areas::GITLET_DIR;
use crate::areas::database::Database;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::blob::Blob;
use crate::errors::GitletError;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `path` relative to the working-tree root
    ///
    /// Absolute paths inside the tree are stripped of the root, `.` and `..`
    /// components are resolved lexically. Fails with
    /// [`GitletError::PathOutsideRepository`] for paths that leave the tree,
    /// name the root itself, or point into `.gitlet`.
    pub fn relative_path(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let outside = || GitletError::PathOutsideRepository(path.to_path_buf());

        let stripped = if path.is_absolute() {
            path.strip_prefix(&self.path).map_err(|_| outside())?
        } else {
            path
        };

        let mut relative = PathBuf::new();
        for component in stripped.components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !relative.pop() {
                        return Err(outside().into());
                    }
                }
                Component::RootDir | Component::Prefix(_) => return Err(outside().into()),
            }
        }

        match relative.components().next() {
            None => Err(outside().into()),
            Some(first) if first.as_os_str() == GITLET_DIR => Err(outside().into()),
            Some(_) => Ok(relative),
        }
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    /// Whether anything (file, directory or link) sits at `path`.
    pub fn entry_exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(self.path.join(path)).is_ok()
    }

    /// Whether `path` is a real directory, not a link to one.
    pub fn is_dir(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(self.path.join(path))
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }

    /// Every entry below the directory `path` with a flag marking directories.
    pub fn entries_below(&self, path: &Path) -> Vec<(PathBuf, bool)> {
        WalkDir::new(self.path.join(path))
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let is_dir = entry.file_type().is_dir();
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .ok()
                    .map(|relative| (relative.to_path_buf(), is_dir))
            })
            .collect()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);
        if !full_path.is_file() {
            return Err(GitletError::FileNotFound(file_path.to_path_buf()).into());
        }

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }

    pub fn parse_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }

    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for: {:?}", file_path))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;
        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete a file if it exists, then prune directories it left empty.
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<bool> {
        let full_path = self.path.join(file_path);
        if !full_path.is_file() {
            return Ok(false);
        }

        std::fs::remove_file(&full_path)
            .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        self.prune_empty_parent_dirs(file_path)?;

        Ok(true)
    }

    fn prune_empty_parent_dirs(&self, file_path: &Path) -> anyhow::Result<()> {
        let mut parent = file_path.parent();

        while let Some(dir) = parent.filter(|dir| !dir.as_os_str().is_empty()) {
            let full_dir = self.path.join(dir);
            let is_empty = std::fs::read_dir(&full_dir)
                .map(|mut entries| entries.next().is_none())
                .unwrap_or(false);
            if !is_empty {
                break;
            }

            std::fs::remove_dir(&full_dir)
                .with_context(|| format!("Failed to remove directory: {:?}", dir))?;
            parent = dir.parent();
        }

        Ok(())
    }

    /// Every regular file under the root, outside `.gitlet`, in sorted order.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != GITLET_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    /// Apply a planned migration: deletions first, then writes.
    pub fn apply_migration(&self, migration: &Migration, database: &Database) -> anyhow::Result<()> {
        for file_path in migration.deletions() {
            self.remove_file(file_path)?;
        }

        for (file_path, oid) in migration.writes() {
            let content = database
                .get(oid)
                .with_context(|| format!("Failed to load content of {:?}", file_path))?;
            self.write_file(file_path, &content)?;
        }

        tracing::debug!(
            written = migration.writes().len(),
            deleted = migration.deletions().len(),
            "applied migration"
        );

        Ok(())
    }
}
