//! Apply one transform to one document and persist the result.

use crate::adapter::adapter_for;
use crate::error::TransformError;
use crate::source::{self, Language, SourceUnit, typescript_path};
use std::path::{Path, PathBuf};
use totypescript_tools::{CodeFixer, FixRequest, FormatSettings, Transpiler};
use totypescript_transforms::bind::REMOVE_BIND_DECORATOR;
use totypescript_transforms::imports::REGENERATE_IMPORTS;
use totypescript_transforms::modifiers::INSERT_ACCESS_MODIFIERS;
use totypescript_transforms::{Rewrite, Transform};

/// What to do with a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Convert to TypeScript and run the configured code fixes.
    StandardFixes,
    /// Transpile CoffeeScript and save it as JavaScript.
    CoffeeToJs,
    /// Replace an AMD `define` wrapper with `import` lines.
    RegenerateImports,
    /// Add `private`/`protected` to underscored constructor parameters.
    InsertAccessModifiers,
    /// Replace `@bind` decorators with explicit constructor bindings.
    RemoveBindDecorator,
}

impl TransformKind {
    /// The text rewrite behind this kind, if it is one.
    pub fn transform(&self) -> Option<&'static dyn Transform> {
        match self {
            TransformKind::StandardFixes | TransformKind::CoffeeToJs => None,
            TransformKind::RegenerateImports => Some(&REGENERATE_IMPORTS),
            TransformKind::InsertAccessModifiers => Some(&INSERT_ACCESS_MODIFIERS),
            TransformKind::RemoveBindDecorator => Some(&REMOVE_BIND_DECORATOR),
        }
    }

    /// Extension a batch run matches by default.
    ///
    /// `StandardFixes` accepts both JavaScript and CoffeeScript; callers
    /// converting CoffeeScript pass `coffee` explicitly.
    pub fn source_extension(&self) -> &'static str {
        match self {
            TransformKind::StandardFixes => "js",
            TransformKind::CoffeeToJs => "coffee",
            _ => "ts",
        }
    }

    /// Where the result for `path` is written.
    pub fn output_path(&self, path: &Path) -> PathBuf {
        match self {
            TransformKind::CoffeeToJs => path.with_extension("js"),
            _ if Language::from_path(path) == Some(Language::TypeScript) => path.to_path_buf(),
            _ => typescript_path(path),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransformKind::StandardFixes => "typescript",
            TransformKind::CoffeeToJs => "coffee-to-js",
            TransformKind::RegenerateImports => "define-to-imports",
            TransformKind::InsertAccessModifiers => "access-modifiers",
            TransformKind::RemoveBindDecorator => "remove-bind-decorator",
        }
    }
}

/// Result of a successful application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// File written, or left alone when nothing changed
    pub path: PathBuf,
    pub changed: bool,
}

/// Runs transforms over documents with the configured collaborators.
pub struct Applier<'a> {
    transpiler: &'a dyn Transpiler,
    fixer: Option<&'a dyn CodeFixer>,
    fix_ids: Vec<String>,
    format: FormatSettings,
}

impl<'a> Applier<'a> {
    pub fn new(transpiler: &'a dyn Transpiler) -> Self {
        Self {
            transpiler,
            fixer: None,
            fix_ids: Vec::new(),
            format: FormatSettings::default(),
        }
    }

    /// Use `fixer` for [`TransformKind::StandardFixes`].
    pub fn with_fixer(mut self, fixer: &'a dyn CodeFixer, fix_ids: Vec<String>) -> Self {
        self.fixer = Some(fixer);
        self.fix_ids = fix_ids;
        self
    }

    pub fn with_format(mut self, format: FormatSettings) -> Self {
        self.format = format;
        self
    }

    /// Open `path` and apply `kind` to it.
    pub fn apply_path(&self, path: &Path, kind: TransformKind) -> Result<Applied, TransformError> {
        let unit = source::open_document(path)?;
        self.apply(&unit, kind)
    }

    /// Apply `kind` to an opened document, saving any new text.
    pub fn apply(&self, unit: &SourceUnit, kind: TransformKind) -> Result<Applied, TransformError> {
        let adapter = adapter_for(unit, self.transpiler, kind == TransformKind::CoffeeToJs)?;
        let target = adapter.logical_file_name();
        let content = adapter.content()?;

        let text = match kind.transform() {
            Some(transform) => match transform.apply(&content) {
                Rewrite::Changed(text) => text,
                Rewrite::Unchanged => {
                    tracing::debug!(
                        path = %unit.path.display(),
                        transform = transform.name(),
                        "unchanged"
                    );
                    return Ok(Applied {
                        path: unit.path.clone(),
                        changed: false,
                    });
                }
            },
            None if kind == TransformKind::StandardFixes => self.fix(unit, &target, content)?,
            None => content,
        };

        source::save(&target, &text)?;
        tracing::info!(path = %target.display(), kind = kind.label(), "converted");
        Ok(Applied {
            path: target,
            changed: true,
        })
    }

    fn fix(
        &self,
        unit: &SourceUnit,
        target: &Path,
        text: String,
    ) -> Result<String, TransformError> {
        let Some(fixer) = self.fixer else {
            tracing::warn!(
                path = %target.display(),
                "no code-fix command configured, saving without fixes"
            );
            return Ok(text);
        };
        if self.fix_ids.is_empty() {
            return Ok(text);
        }

        let file_name = target.to_string_lossy();
        let request = FixRequest {
            file_name: &file_name,
            text: &text,
            fix_ids: &self.fix_ids,
            format: &self.format,
        };
        fixer
            .apply_fixes(&request)
            .map_err(|source| TransformError::Tool {
                path: unit.path.clone(),
                tool: fixer.info().name,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use totypescript_tools::{ToolError, ToolInfo};

    static FAKE_INFO: ToolInfo = ToolInfo {
        name: "fake",
        website: "",
    };

    struct Passthrough;

    impl Transpiler for Passthrough {
        fn info(&self) -> &ToolInfo {
            &FAKE_INFO
        }

        fn is_available(&self) -> bool {
            true
        }

        fn transpile(&self, source: &str) -> Result<String, ToolError> {
            Ok(format!("// transpiled\n{source}"))
        }
    }

    struct AppendIds;

    impl CodeFixer for AppendIds {
        fn info(&self) -> &ToolInfo {
            &FAKE_INFO
        }

        fn apply_fixes(&self, request: &FixRequest<'_>) -> Result<String, ToolError> {
            Ok(format!("{}// {}\n", request.text, request.fix_ids.join(",")))
        }
    }

    #[test]
    fn test_output_paths() {
        let kind = TransformKind::StandardFixes;
        assert_eq!(kind.output_path(Path::new("a/b.js")), Path::new("a/b.ts"));
        assert_eq!(kind.output_path(Path::new("a/b.coffee")), Path::new("a/b.ts"));
        assert_eq!(kind.output_path(Path::new("a/b.jsx")), Path::new("a/b.tsx"));
        assert_eq!(
            TransformKind::CoffeeToJs.output_path(Path::new("b.coffee")),
            Path::new("b.js")
        );
        assert_eq!(
            TransformKind::InsertAccessModifiers.output_path(Path::new("b.tsx")),
            Path::new("b.tsx")
        );
    }

    #[test]
    fn test_rewrite_saves_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ts");
        std::fs::write(&path, "constructor(_a, __b) {}").unwrap();

        let applier = Applier::new(&Passthrough);
        let applied = applier
            .apply_path(&path, TransformKind::InsertAccessModifiers)
            .unwrap();

        assert_eq!(applied, Applied { path: path.clone(), changed: true });
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "constructor(protected _a, private __b) {}"
        );
    }

    #[test]
    fn test_unchanged_rewrite_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ts");
        std::fs::write(&path, "let x = 1;").unwrap();

        let applied = Applier::new(&Passthrough)
            .apply_path(&path, TransformKind::RegenerateImports)
            .unwrap();
        assert!(!applied.changed);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "let x = 1;");
    }

    #[test]
    fn test_standard_fixes_writes_ts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.js");
        std::fs::write(&path, "var x = 1;\n").unwrap();

        let fixer = AppendIds;
        let applier = Applier::new(&Passthrough)
            .with_fixer(&fixer, vec!["requireInTs".into(), "fixUnreachableCode".into()]);
        let applied = applier.apply_path(&path, TransformKind::StandardFixes).unwrap();

        assert_eq!(applied.path, dir.path().join("a.ts"));
        assert_eq!(
            std::fs::read_to_string(&applied.path).unwrap(),
            "var x = 1;\n// requireInTs,fixUnreachableCode\n"
        );
        assert!(path.exists());
    }

    #[test]
    fn test_standard_fixes_without_fixer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.coffee");
        std::fs::write(&path, "x = 1\n").unwrap();

        let applied = Applier::new(&Passthrough)
            .apply_path(&path, TransformKind::StandardFixes)
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(applied.path).unwrap(),
            "// transpiled\nx = 1\n"
        );
    }

    #[test]
    fn test_coffee_to_js() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.coffee");
        std::fs::write(&path, "x = 1\n").unwrap();

        let applied = Applier::new(&Passthrough)
            .apply_path(&path, TransformKind::CoffeeToJs)
            .unwrap();
        assert_eq!(applied.path, dir.path().join("a.js"));
        assert!(applied.changed);
    }

    #[test]
    fn test_unsupported_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.md");
        std::fs::write(&path, "# hi").unwrap();

        let err = Applier::new(&Passthrough)
            .apply_path(&path, TransformKind::StandardFixes)
            .unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedLanguage { .. }));
        assert_eq!(err.path(), path);
    }
}
