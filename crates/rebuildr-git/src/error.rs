#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git CLI not found — install git and ensure it is on PATH")]
    NotFound { source: std::io::Error },

    #[error("git command failed: {args:?}\n{stderr}")]
    CommandFailed {
        args: Vec<String>,
        stderr: String,
        code: Option<i32>,
    },

    #[error("git output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}

impl GitError {
    /// Exit status of the underlying tool, when it ran and failed.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}
