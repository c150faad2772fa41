#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("docker CLI not found — install docker and ensure it is on PATH")]
    NotFound { source: std::io::Error },

    #[error("docker command failed: {args:?}\n{stderr}")]
    CommandFailed {
        args: Vec<String>,
        stderr: String,
        code: Option<i32>,
    },

    #[error("docker output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}

impl DockerError {
    /// Exit status of the underlying tool, when it ran and failed.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}
