use std::path::Path;

use crate::error::DockerError;

/// Abstraction over docker CLI execution for testability.
///
/// Production code uses [`RealDockerExecutor`], tests use
/// mockall-generated mocks. Every command takes its working directory
/// explicitly; nothing changes the process-wide current directory.
#[allow(async_fn_in_trait)]
pub trait DockerExecutor: Send + Sync {
    /// Execute a docker command in `dir` and capture stdout.
    async fn exec(&self, dir: &Path, args: &[String]) -> Result<String, DockerError>;

    /// Execute a docker command in `dir`, streaming output to the terminal.
    async fn exec_streaming(&self, dir: &Path, args: &[String]) -> Result<(), DockerError>;
}

/// Real docker CLI executor.
pub struct RealDockerExecutor;

impl DockerExecutor for RealDockerExecutor {
    async fn exec(&self, dir: &Path, args: &[String]) -> Result<String, DockerError> {
        use std::process::Stdio;

        let output = tokio::process::Command::new("docker")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DockerError::NotFound { source: e })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| DockerError::InvalidUtf8 { source: e })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(DockerError::CommandFailed {
                args: args.to_vec(),
                stderr,
                code: output.status.code(),
            })
        }
    }

    async fn exec_streaming(&self, dir: &Path, args: &[String]) -> Result<(), DockerError> {
        use std::process::Stdio;

        let status = tokio::process::Command::new("docker")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| DockerError::NotFound { source: e })?;

        if status.success() {
            Ok(())
        } else {
            Err(DockerError::CommandFailed {
                args: args.to_vec(),
                stderr: format!("exit code: {status}"),
                code: status.code(),
            })
        }
    }
}
