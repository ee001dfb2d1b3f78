//! Working tree status inspection
//!
//! - `file_change`: how a working file differs from what would be committed
//! - `status_info`: the five status sections and their rendering

pub mod file_change;
pub mod status_info;
