//! Documents on disk: opening with language detection, and saving.

use crate::error::TransformError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Source language of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    CoffeeScript,
    JavaScript,
    TypeScript,
}

impl Language {
    /// Detect from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "coffee" => Some(Language::CoffeeScript),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::CoffeeScript => "coffeescript",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The TypeScript counterpart of a source path: `.jsx` becomes `.tsx`,
/// `.mjs`/`.cjs` become `.mts`/`.cts`, anything else `.ts`.
pub fn typescript_path(path: &Path) -> PathBuf {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some("jsx" | "tsx") => "tsx",
        Some("mjs" | "mts") => "mts",
        Some("cjs" | "cts") => "cts",
        _ => "ts",
    };
    path.with_extension(ext)
}

/// One opened document. Never mutated; a transform writes a new file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub language: Language,
    pub text: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, language: Language, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language,
            text: text.into(),
        }
    }
}

/// Read a whole document and detect its language.
pub fn open_document(path: &Path) -> Result<SourceUnit, TransformError> {
    let language = Language::from_path(path).ok_or_else(|| TransformError::UnsupportedLanguage {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceUnit::new(path, language, text))
}

/// Write `text` to `path`, replacing any existing file.
pub fn save(path: &Path, text: &str) -> Result<(), TransformError> {
    let io_err = |source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, text).map_err(io_err)
}
