//! Branch names
//!
//! Branches are named, movable pointers to commits. Remote-tracking branches
//! created by `fetch` use the `<remote>/<branch>` form and are ordinary branches
//! otherwise.

pub mod branch_name;

/// Names matching this pattern are rejected.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch every new repository starts on
pub const DEFAULT_BRANCH: &str = "master";
