//! Remote table
//!
//! A remote is a name for another repository's `.gitlet` directory on the local
//! filesystem. Relative paths are kept as given and resolved against the
//! working-tree root when the remote is opened.

use crate::errors::GitletError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Remotes {
    remotes: BTreeMap<String, PathBuf>,
}

impl Remotes {
    pub fn add(&mut self, name: &str, path: PathBuf) -> anyhow::Result<()> {
        if self.remotes.contains_key(name) {
            return Err(GitletError::RemoteExists(name.to_string()).into());
        }

        tracing::debug!(remote = name, path = %path.display(), "added remote");
        self.remotes.insert(name.to_string(), path);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> anyhow::Result<PathBuf> {
        self.remotes
            .remove(name)
            .ok_or_else(|| GitletError::RemoteNotFound(name.to_string()).into())
    }

    pub fn get(&self, name: &str) -> anyhow::Result<&Path> {
        self.remotes
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| GitletError::RemoteNotFound(name.to_string()).into())
    }
}
