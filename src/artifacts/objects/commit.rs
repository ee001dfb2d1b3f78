//! Commit object
//!
//! Commits are immutable snapshots of the tracked files. They contain:
//! - Parent commit ID(s) (none for the initial commit, two for merge commits)
//! - A timestamp
//! - A mapping from tracked path to blob ID
//! - A commit message
//!
//! ## Format
//!
//! Hashed form:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! timestamp <unix-seconds> <timezone>
//! file <blob-sha> <path>
//!
//! <commit message>
//! ```
//!
//! The digest is a pure function of these fields: two commits with the same
//! parents, timestamp, tracked files and message are the same commit.

use crate::artifacts::objects::object::{Object, Packable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Message of the root commit every repository starts from
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Environment variable overriding the timestamp of new commits
pub const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";

/// Tracked path to blob ID
pub type TrackedFiles = BTreeMap<PathBuf, ObjectId>;

/// Commit object
///
/// Parents are referenced by digest and resolved through the commit graph;
/// a commit never holds a direct reference to another commit.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Parent commit IDs (empty for the initial commit, two for merge commits)
    parents: Vec<ObjectId>,
    /// When the commit was made
    timestamp: DateTime<FixedOffset>,
    /// Snapshot of tracked files
    tracked: TrackedFiles,
    /// Commit message
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        tracked: TrackedFiles,
        message: String,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Commit {
            parents,
            timestamp,
            tracked,
            message,
        }
    }

    /// The parentless root commit.
    ///
    /// It tracks nothing and carries the Unix epoch as its timestamp, so its
    /// digest depends on the fixed message alone and is shared by every repository.
    pub fn initial() -> Self {
        let epoch = FixedOffset::east_opt(0)
            .and_then(|utc| utc.timestamp_opt(0, 0).single())
            .unwrap_or_default();

        Commit::new(
            Vec::new(),
            TrackedFiles::new(),
            INITIAL_COMMIT_MESSAGE.to_string(),
            epoch,
        )
    }

    /// Timestamp for a new commit
    ///
    /// Reads GITLET_COMMIT_DATE (RFC 2822 or `%Y-%m-%d %H:%M:%S %z`) and falls back
    /// to the current local time when it is unset or unparsable.
    pub fn timestamp_from_env() -> DateTime<FixedOffset> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| {
                DateTime::parse_from_rfc2822(&date_str)
                    .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                    .ok()
            })
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// First parent, the one `log` follows
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn is_initial(&self) -> bool {
        self.parents.is_empty() && self.message == INITIAL_COMMIT_MESSAGE
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn tracked(&self) -> &TrackedFiles {
        &self.tracked
    }

    pub fn blob_for(&self, path: &Path) -> Option<&ObjectId> {
        self.tracked.get(path)
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.tracked.contains_key(path)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        for parent in &self.parents {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        object_content.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (path, blob_oid) in &self.tracked {
            object_content.push(format!("file {} {}", blob_oid.as_ref(), path.display()));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        Ok(frame(&self.object_type(), object_content.as_bytes()))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
