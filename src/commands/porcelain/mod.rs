//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage a file for commit
//! - `commit`: Create a new commit
//! - `rm`: Unstage a file or stage its removal
//! - `log`: Show history (`log`, `global-log`, `find`)
//! - `checkout`: Switch branches or restore files
//! - `branch`: Create or delete branches
//! - `reset`: Move the current branch to a commit
//! - `status`: Show branches, staged files and working changes
//! - `merge`: Three-way merge of another branch
//! - `remote`: Register and forget remotes
//! - `fetch`, `push`, `pull`: Exchange history with remotes

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod fetch;
pub mod init;
pub mod log;
pub mod merge;
pub mod pull;
pub mod push;
pub mod remote;
pub mod reset;
pub mod rm;
pub mod status;
