use rebuildr_core::RebuildrConfig;
use rebuildr_docker::{DockerClient, DockerError, DockerExecutor};
use rebuildr_git::{GitClient, GitError, GitExecutor};

/// Result of one runner invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The working copy was current (or the override said no). Nothing
    /// beyond the probe ran.
    UpToDate,
    /// Sync, build, and publish all completed for `image`.
    Rebuilt { image: String },
}

/// Rebuild decision runner, parameterized over both executors for
/// testability.
pub struct Runner<G: GitExecutor, D: DockerExecutor> {
    pub(crate) git: GitClient<G>,
    pub(crate) docker: DockerClient<D>,
    pub(crate) config: RebuildrConfig,
}

impl<G: GitExecutor, D: DockerExecutor> Runner<G, D> {
    pub fn new(git: GitClient<G>, docker: DockerClient<D>, config: RebuildrConfig) -> Self {
        Self {
            git,
            docker,
            config,
        }
    }

    /// Compute the rebuild decision: an explicit override wins,
    /// otherwise the remote staleness probe.
    pub async fn decide(&self, rebuild_override: Option<bool>) -> Result<bool, RunError> {
        match rebuild_override {
            Some(forced) => {
                tracing::debug!(forced, "rebuild decision overridden");
                Ok(forced)
            }
            None => self
                .git
                .is_stale(&self.config.source.dir, &self.config.source.remote)
                .await
                .map_err(|e| RunError::Probe { source: e }),
        }
    }

    /// Run the full pipeline.
    ///
    /// The decision is computed once and never revisited. When it is
    /// false no external operation runs beyond the probe itself.
    pub async fn run(&self, rebuild_override: Option<bool>) -> Result<Outcome, RunError> {
        let should_rebuild = self.decide(rebuild_override).await?;
        if !should_rebuild {
            return Ok(Outcome::UpToDate);
        }

        let dir = &self.config.source.dir;
        let remote = &self.config.source.remote;
        let image = self.config.image_ref().to_string();

        println!("Pulling from {remote}...");
        self.git
            .pull(dir, remote)
            .await
            .map_err(|e| RunError::Sync { source: e })?;

        println!("Building {image}...");
        self.docker
            .build(
                dir,
                &self.config.image.dockerfile,
                &self.config.image.context,
                &image,
            )
            .await
            .map_err(|e| RunError::Build { source: e })?;

        println!("Pushing {image}...");
        self.docker
            .push(dir, &image)
            .await
            .map_err(|e| RunError::Publish { source: e })?;

        Ok(Outcome::Rebuilt { image })
    }
}

/// Confirmation emitted after a successful rebuild-and-publish, naming
/// the image and how to run it.
pub fn banner(image: &str) -> String {
    format!("Rebuilt and pushed: {image}\nRun it with: docker run --rm {image}")
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("staleness probe failed")]
    Probe { source: GitError },

    #[error("failed to synchronize working copy from remote")]
    Sync { source: GitError },

    #[error("image build failed")]
    Build { source: DockerError },

    #[error("image push failed")]
    Publish { source: DockerError },
}

impl RunError {
    /// Exit status to propagate: the failing tool's own code when known.
    pub fn exit_code(&self) -> i32 {
        let code = match self {
            Self::Probe { source } | Self::Sync { source } => source.exit_code(),
            Self::Build { source } | Self::Publish { source } => source.exit_code(),
        };
        code.unwrap_or(1)
    }
}
