use std::path::Path;

use crate::error::GitError;

/// Abstraction over git CLI execution for testability.
///
/// Production code uses [`RealGitExecutor`], tests use mockall-generated
/// mocks. Every command takes its working directory explicitly; nothing
/// changes the process-wide current directory.
#[allow(async_fn_in_trait)]
pub trait GitExecutor: Send + Sync {
    /// Execute a git command in `dir` and capture stdout.
    async fn exec(&self, dir: &Path, args: &[String]) -> Result<String, GitError>;

    /// Execute a git command in `dir`, streaming output to the terminal.
    async fn exec_streaming(&self, dir: &Path, args: &[String]) -> Result<(), GitError>;
}

/// Real git CLI executor.
pub struct RealGitExecutor;

impl GitExecutor for RealGitExecutor {
    async fn exec(&self, dir: &Path, args: &[String]) -> Result<String, GitError> {
        use std::process::Stdio;

        let output = tokio::process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| GitError::NotFound { source: e })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| GitError::InvalidUtf8 { source: e })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(GitError::CommandFailed {
                args: args.to_vec(),
                stderr,
                code: output.status.code(),
            })
        }
    }

    async fn exec_streaming(&self, dir: &Path, args: &[String]) -> Result<(), GitError> {
        use std::process::Stdio;

        let status = tokio::process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| GitError::NotFound { source: e })?;

        if status.success() {
            Ok(())
        } else {
            Err(GitError::CommandFailed {
                args: args.to_vec(),
                stderr: format!("exit code: {status}"),
                code: status.code(),
            })
        }
    }
}
