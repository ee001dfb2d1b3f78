//! Object transfer between repositories for `fetch` and `push`

pub mod transfer;
