//! Apply one transform to every matching file under a root.

use crate::apply::{Applier, TransformKind};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Counts from one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Files handled successfully, including those needing no change
    pub processed: usize,
    /// Subset of `processed` left untouched
    pub unchanged: usize,
    /// Output paths of files that failed, in traversal order
    pub failed: Vec<PathBuf>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Walks a tree applying one transform per matching file.
pub struct BatchDriver<'a> {
    applier: &'a Applier<'a>,
    skip_dirs: Vec<String>,
}

impl<'a> BatchDriver<'a> {
    pub fn new(applier: &'a Applier<'a>) -> Self {
        Self {
            applier,
            skip_dirs: Vec::new(),
        }
    }

    /// Directory names never descended into (hidden directories always are).
    pub fn with_skip_dirs(mut self, skip_dirs: Vec<String>) -> Self {
        self.skip_dirs = skip_dirs;
        self
    }

    /// Run over files with `kind`'s default source extension.
    pub fn run(&self, root: &Path, kind: TransformKind) -> BatchOutcome {
        self.run_with_extension(root, kind.source_extension(), kind)
    }

    /// Run over files whose extension is exactly `extension`.
    ///
    /// A root that is a file is handled as a single leaf.
    pub fn run_with_extension(
        &self,
        root: &Path,
        extension: &str,
        kind: TransformKind,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_skipped(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("cannot walk: {e}");
                    outcome.failed.push(e.path().unwrap_or(root).to_path_buf());
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }

            match self.applier.apply_path(path, kind) {
                Ok(applied) => {
                    outcome.processed += 1;
                    if !applied.changed {
                        outcome.unchanged += 1;
                    }
                }
                Err(e) => {
                    tracing::warn!("{e}");
                    outcome.failed.push(kind.output_path(path));
                }
            }
        }

        tracing::debug!(
            root = %root.display(),
            processed = outcome.processed,
            failed = outcome.failed.len(),
            "batch finished"
        );
        outcome
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || self.skip_dirs.iter().any(|d| *d == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use totypescript_tools::{ToolError, ToolInfo, Transpiler};

    static NOOP_INFO: ToolInfo = ToolInfo {
        name: "noop",
        website: "",
    };

    struct Noop;

    impl Transpiler for Noop {
        fn info(&self) -> &ToolInfo {
            &NOOP_INFO
        }

        fn is_available(&self) -> bool {
            true
        }

        fn transpile(&self, source: &str) -> Result<String, ToolError> {
            Ok(source.to_string())
        }
    }

    fn write(path: &Path, text: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    #[test]
    fn test_skips_hidden_and_configured_dirs() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("src/a.ts"), "constructor(_a) {}");
        write(&dir.path().join(".git/b.ts"), "constructor(_a) {}");
        write(&dir.path().join("node_modules/x/c.ts"), "constructor(_a) {}");

        let applier = Applier::new(&Noop);
        let outcome = BatchDriver::new(&applier)
            .with_skip_dirs(vec!["node_modules".to_string()])
            .run(dir.path(), TransformKind::InsertAccessModifiers);

        assert_eq!(outcome.processed, 1);
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".git/b.ts")).unwrap(),
            "constructor(_a) {}"
        );
    }

    #[test]
    fn test_file_root_is_single_leaf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ts");
        write(&path, "let a = 1;");

        let applier = Applier::new(&Noop);
        let outcome = BatchDriver::new(&applier).run(&path, TransformKind::RemoveBindDecorator);
        assert_eq!(
            outcome,
            BatchOutcome {
                processed: 1,
                unchanged: 1,
                failed: Vec::new(),
            }
        );
    }

    #[test]
    fn test_missing_root_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let applier = Applier::new(&Noop);
        let outcome = BatchDriver::new(&applier).run(&missing, TransformKind::StandardFixes);
        assert_eq!(outcome.processed, 0);
        assert_eq!(outcome.failed, vec![missing]);
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_empty_tree() {
        let dir = tempfile::tempdir().unwrap();
        let applier = Applier::new(&Noop);
        let outcome = BatchDriver::new(&applier).run(dir.path(), TransformKind::StandardFixes);
        assert_eq!(outcome, BatchOutcome::default());
        assert!(outcome.is_success());
    }
}
