use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnippetError>;

/// Every way a single export run can fail. None of these are retried.
#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("snippets directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("snippet file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(
        "failed to parse snippet file {} (line {}, column {})",
        path.display(),
        source.line(),
        source.column()
    )]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
