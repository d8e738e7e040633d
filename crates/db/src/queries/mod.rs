// crates/db/src/queries/mod.rs
// Token, tracked-repository and snapshot queries for the analytics database.

mod snapshots;
mod tokens;
mod tracked;
mod types;

pub use types::*;
