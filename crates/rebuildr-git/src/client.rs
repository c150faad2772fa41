use std::path::Path;

use crate::error::GitError;
use crate::executor::{GitExecutor, RealGitExecutor};

/// Textual marker `git remote show` prints against each branch the
/// remote is ahead of.
pub const STALE_MARKER: &str = "local out of date";

/// Git operations client, parameterized over the executor for testability.
pub struct GitClient<E: GitExecutor = RealGitExecutor> {
    executor: E,
}

impl GitClient<RealGitExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealGitExecutor,
        }
    }
}

impl Default for GitClient<RealGitExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GitExecutor> GitClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// `git --version`, trimmed.
    pub async fn version(&self) -> Result<String, GitError> {
        let output = self.executor.exec(Path::new("."), &args(["--version"])).await?;
        Ok(output.trim().to_owned())
    }

    /// Whether `dir` is inside a git work tree.
    pub async fn is_work_tree(&self, dir: &Path) -> bool {
        self.executor
            .exec(dir, &args(["rev-parse", "--is-inside-work-tree"]))
            .await
            .map(|out| out.trim() == "true")
            .unwrap_or(false)
    }

    /// Query the remote and report whether the local copy is behind it.
    ///
    /// This contacts the remote, so it fails when the remote is
    /// unreachable.
    pub async fn is_stale(&self, dir: &Path, remote: &str) -> Result<bool, GitError> {
        tracing::debug!(remote, dir = %dir.display(), "probing remote for staleness");
        let output = self
            .executor
            .exec(dir, &args(["remote", "show", remote]))
            .await?;
        Ok(output.contains(STALE_MARKER))
    }

    /// Update the working copy from the remote, streaming git's output.
    pub async fn pull(&self, dir: &Path, remote: &str) -> Result<(), GitError> {
        tracing::debug!(remote, dir = %dir.display(), "pulling working copy");
        self.executor
            .exec_streaming(dir, &args(["pull", remote]))
            .await
    }
}

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}
