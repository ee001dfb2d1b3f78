//! A tiny version-control system
//!
//! The crate is split the same way the on-disk repository is:
//!
//! - `areas`: the persistent parts of a repository (object database, commit graph,
//!   staging index, branch table, remotes, working tree) and the `Repository` aggregate
//! - `artifacts`: value types and algorithms (objects, branch names, checkout migrations,
//!   split-point discovery, merge resolution, status, log formatting, remote transfer)
//! - `commands`: one porcelain command per file, each an `impl Repository` block
//! - `errors`: the typed failures every command can report

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use errors::{ErrorKind, GitletError};
