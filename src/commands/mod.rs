//! Command implementations
//!
//! Every user-facing command is an `impl Repository` block under `porcelain`,
//! one file per command (or per closely related group of commands).

pub mod porcelain;
