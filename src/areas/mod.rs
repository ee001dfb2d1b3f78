//! Core repository components
//!
//! - `database`: content-addressed blob store
//! - `graph`: every known commit, keyed by digest
//! - `index`: staging area for the next commit
//! - `refs`: branch table and the current branch
//! - `remotes`: named links to other repositories
//! - `snapshot`: persisted form of graph, refs, index and remotes
//! - `repository`: ties the areas together for the porcelain commands
//! - `workspace`: working directory file system operations
//!
//! ## Layout
//!
//! ```text
//! <root>/
//!   .gitlet/
//!     objects/<xx>/<yyyy...>   zlib-compressed blobs
//!     repository.json          snapshot
//!   ...working files...
//! ```

pub mod database;
pub mod graph;
pub mod index;
pub mod refs;
pub mod remotes;
pub mod repository;
pub mod snapshot;
pub mod workspace;

/// Metadata directory at the working-tree root
pub const GITLET_DIR: &str = ".gitlet";

/// Blob store directory inside [`GITLET_DIR`]
pub const OBJECTS_DIR: &str = "objects";

/// Snapshot file inside [`GITLET_DIR`]
pub const SNAPSHOT_FILE: &str = "repository.json";
