use std::path::Path;

use crate::error::DockerError;
use crate::executor::{DockerExecutor, RealDockerExecutor};

/// Docker operations client, parameterized over the executor for testability.
pub struct DockerClient<E: DockerExecutor = RealDockerExecutor> {
    executor: E,
}

impl DockerClient<RealDockerExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealDockerExecutor,
        }
    }
}

impl Default for DockerClient<RealDockerExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockerExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Daemon server version, trimmed. Fails when the daemon is not
    /// reachable.
    pub async fn version(&self) -> Result<String, DockerError> {
        let output = self
            .executor
            .exec(
                Path::new("."),
                &args(["version", "--format", "{{.Server.Version}}"]),
            )
            .await?;
        Ok(output.trim().to_owned())
    }

    /// Build `image` from `context` using `dockerfile`, streaming build
    /// output to the terminal. Paths are relative to `dir`.
    pub async fn build(
        &self,
        dir: &Path,
        dockerfile: &str,
        context: &str,
        image: &str,
    ) -> Result<(), DockerError> {
        tracing::debug!(image, dockerfile, context, "building image");
        self.executor
            .exec_streaming(dir, &args(["build", "-f", dockerfile, "-t", image, context]))
            .await
    }

    /// Push `image` to its registry, streaming output to the terminal.
    pub async fn push(&self, dir: &Path, image: &str) -> Result<(), DockerError> {
        tracing::debug!(image, "pushing image");
        self.executor
            .exec_streaming(dir, &args(["push", image]))
            .await
    }

    /// Creation time of the local `image`, when it exists.
    ///
    /// `docker image inspect` prints a JSON array with one object per
    /// matched image; a non-zero exit means no such image.
    pub async fn image_created(&self, dir: &Path, image: &str) -> Option<String> {
        let output = self
            .executor
            .exec(dir, &args(["image", "inspect", image]))
            .await
            .ok()?;
        let inspected: serde_json::Value = serde_json::from_str(&output).ok()?;
        inspected
            .as_array()?
            .first()?
            .get("Created")?
            .as_str()
            .map(str::to_owned)
    }
}

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}
