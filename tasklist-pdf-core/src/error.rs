use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskListError {
    #[error("JSON file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid task list in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Font error for {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error("PDF error: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),
}

impl TaskListError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        TaskListError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True when the run failed only because the input file is absent.
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, TaskListError::SourceNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TaskListError>;
