use thiserror::Error;

/// Fatal conditions. Each one ends the process with `Error: <message>`.
#[derive(Debug, Error)]
pub enum AsdfError {
    #[error("{0}")]
    Usage(String),

    #[error("invalid shortcut name, only letters, numbers, _, -")]
    InvalidName,

    #[error("path doesn't exist: {0}")]
    PathNotFound(String),

    #[error("shortcut doesn't exist: {0}")]
    UnknownShortcut(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("failed to open terminal")]
    TerminalFailed,

    #[error("editor {0}")]
    EditorFailed(String),

    #[error("could not determine home directory (HOME is not set)")]
    HomeNotSet,
}
