use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::fmt;

/// One commit as shown in the history
///
/// ```text
/// ===
/// commit <id>
/// Merge: <parent1[..7]> <parent2[..7]>
/// Date: Thu Jan 1 00:00:00 1970 +0000
/// <message>
///
/// ```
///
/// The `Merge:` line only appears for merge commits.
#[derive(Debug, new)]
pub struct LogEntry<'c> {
    oid: &'c ObjectId,
    commit: &'c Commit,
}

impl fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        writeln!(f, "commit {}", self.oid)?;
        if self.commit.is_merge() {
            let parents = self
                .commit
                .parents()
                .iter()
                .map(ObjectId::to_short_oid)
                .collect::<Vec<_>>();
            writeln!(f, "Merge: {}", parents.join(" "))?;
        }
        writeln!(f, "Date: {}", self.commit.readable_timestamp())?;
        writeln!(f, "{}", self.commit.message())?;
        writeln!(f)
    }
}
