//! Commit history rendering
//!
//! - `log_entry`: the block printed for one commit by `log` and `global-log`

pub mod log_entry;
