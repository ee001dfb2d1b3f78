use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    /// Every branch with a flag marking the current one
    pub(crate) branches: Vec<(BranchName, bool)>,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

impl StatusInfo {
    pub fn staged_files(&self) -> &FileSet {
        &self.staged_files
    }

    pub fn removed_files(&self) -> &FileSet {
        &self.removed_files
    }

    pub fn workspace_changeset(&self) -> &ChangeSet {
        &self.workspace_changeset
    }

    pub fn untracked_files(&self) -> &FileSet {
        &self.untracked_files
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let refs = self.repository.refs();
        let index = self.repository.index();
        let head_tree = self.repository.head_commit()?.tracked();

        let branches = refs
            .list_branches()
            .map(|(name, _)| (name.clone(), refs.is_current_branch(name)))
            .collect();

        let mut workspace_changeset = ChangeSet::new();
        for (path, staged_oid) in index.additions() {
            if let Some(change) = self.compare_with_workspace(path, staged_oid)? {
                workspace_changeset.insert(path.clone(), change);
            }
        }
        for (path, head_oid) in head_tree {
            if index.is_staged_for_addition(path) || index.is_staged_for_removal(path) {
                continue;
            }
            if let Some(change) = self.compare_with_workspace(path, head_oid)? {
                workspace_changeset.insert(path.clone(), change);
            }
        }

        let untracked_files = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .filter(|path| {
                !index.is_staged_for_addition(path)
                    && (!head_tree.contains_key(path) || index.is_staged_for_removal(path))
            })
            .collect();

        Ok(StatusInfo {
            branches,
            staged_files: index.additions().keys().cloned().collect(),
            removed_files: index.removals().clone(),
            workspace_changeset,
            untracked_files,
        })
    }

    fn compare_with_workspace(
        &self,
        path: &Path,
        expected: &ObjectId,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        let workspace = self.repository.workspace();
        if !workspace.file_exists(path) {
            return Ok(Some(WorkspaceChangeType::Deleted));
        }

        let actual = workspace.parse_blob(path)?.object_id()?;
        Ok((&actual != expected).then_some(WorkspaceChangeType::Modified))
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Branches ===")?;
        for (branch, is_current) in &self.branches {
            let marker = if *is_current { "*" } else { "" };
            writeln!(f, "{marker}{branch}")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for path in &self.staged_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for path in &self.removed_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (path, change) in &self.workspace_changeset {
            writeln!(f, "{} {}", path.display(), change)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for path in &self.untracked_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)
    }
}
