//! Working-tree updates for checkout, reset and fast-forward merges

pub mod migration;
