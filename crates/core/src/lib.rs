// crates/core/src/lib.rs
pub mod error;
pub mod github;
pub mod paths;
pub mod types;

pub use error::*;
pub use github::{GithubClient, StatsSource};
pub use types::*;
