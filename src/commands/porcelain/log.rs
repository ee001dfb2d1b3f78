use crate::areas::repository::Repository;
use crate::artifacts::log::log_entry::LogEntry;
use std::io::Write;

impl Repository {
    /// History of the current branch, following first parents back to the
    /// initial commit.
    pub fn log(&self) -> anyhow::Result<()> {
        let head = self.head_oid()?;

        for entry in self.commits().first_parent_history(&head) {
            let (oid, commit) = entry?;
            write!(self.writer(), "{}", LogEntry::new(&oid, commit))?;
        }

        Ok(())
    }

    /// Every commit ever made, in no particular order.
    pub fn global_log(&self) -> anyhow::Result<()> {
        for (oid, commit) in self.commits().iter() {
            write!(self.writer(), "{}", LogEntry::new(oid, commit))?;
        }

        Ok(())
    }

    /// Print the ID of every commit whose message is exactly `message`.
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let matches = self.commits().find_by_message(message);

        if matches.is_empty() {
            writeln!(self.writer(), "Found no commit with that message.")?;
        }
        for oid in matches {
            writeln!(self.writer(), "{oid}")?;
        }

        Ok(())
    }
}
