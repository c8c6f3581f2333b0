//! Per-file failure type.

use std::path::{Path, PathBuf};
use totypescript_tools::ToolError;

/// A file could not be transformed or persisted.
///
/// Batch runs record these and move on; single-file runs surface them.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no adapter for {}", path.display())]
    UnsupportedLanguage { path: PathBuf },

    #[error("{tool} failed on {}: {source}", path.display())]
    Tool {
        path: PathBuf,
        tool: &'static str,
        #[source]
        source: ToolError,
    },
}

impl TransformError {
    /// The file the failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            TransformError::Io { path, .. }
            | TransformError::UnsupportedLanguage { path }
            | TransformError::Tool { path, .. } => path,
        }
    }
}
