use thiserror::Error;

#[derive(Debug, Error)]
pub enum AidevError {
    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error("no supported package manager found: install bun or npm, then rerun")]
    NoPackageManager,

    #[error("{program} {subcommand} failed: {detail}")]
    CommandFailed {
        program: String,
        subcommand: String,
        detail: String,
    },

    #[error("refusing to replace directory with symlink: {0}")]
    WouldClobberDirectory(String),

    #[error("agent linking is not supported on this platform")]
    SymlinksUnsupported,

    #[error("corrupt session state at {path}: {source}")]
    CorruptSession {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AidevError>;
