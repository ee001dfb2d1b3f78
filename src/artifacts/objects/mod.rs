//! Object types and operations
//!
//! All content is identified by SHA-1 hashes. There are two kinds of objects:
//!
//! - **Blob**: File content (raw bytes), stored in the object database
//! - **Commit**: Snapshot of tracked paths with lineage metadata, stored in the commit graph
//!
//! Both are hashed over the framed form `<type> <size>\0<content>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated form printed for merge parents
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
