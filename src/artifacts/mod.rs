//! Data structures and algorithms
//!
//! - `branch`: Branch names
//! - `checkout`: Working-tree migration between commits
//! - `core`: Output plumbing (pager wrapper)
//! - `log`: History rendering
//! - `merge`: Split points, per-file merge rules and conflict content
//! - `objects`: Object types (blob, commit) and IDs
//! - `remote`: Object transfer between repositories
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod log;
pub mod merge;
pub mod objects;
pub mod remote;
pub mod status;
