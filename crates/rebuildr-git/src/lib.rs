//! Git operations for rebuildr: the remote staleness probe and the
//! working-copy sync.

pub mod client;
pub mod error;
pub mod executor;

pub use client::{GitClient, STALE_MARKER};
pub use error::GitError;
pub use executor::{GitExecutor, RealGitExecutor};
