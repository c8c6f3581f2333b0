//! Per-language views of a document.
//!
//! An adapter answers two questions about a [`SourceUnit`]: what text the
//! transforms should see, and under which file name the result is saved.

use crate::error::TransformError;
use crate::source::{Language, SourceUnit, typescript_path};
use std::path::PathBuf;
use totypescript_tools::Transpiler;

/// Uniform access to a document regardless of its source language.
pub trait SourceAdapter {
    /// Text to hand to the transforms (transpiled when needed).
    fn content(&self) -> Result<String, TransformError>;

    /// Where the converted document lives, extension already mapped.
    fn logical_file_name(&self) -> PathBuf;
}

/// TypeScript sources pass through untouched.
pub struct TypeScriptAdapter<'a> {
    unit: &'a SourceUnit,
}

impl<'a> TypeScriptAdapter<'a> {
    pub fn new(unit: &'a SourceUnit) -> Self {
        Self { unit }
    }
}

impl SourceAdapter for TypeScriptAdapter<'_> {
    fn content(&self) -> Result<String, TransformError> {
        Ok(self.unit.text.clone())
    }

    fn logical_file_name(&self) -> PathBuf {
        self.unit.path.clone()
    }
}

/// JavaScript is valid TypeScript; only the file name changes.
pub struct JavaScriptAdapter<'a> {
    unit: &'a SourceUnit,
}

impl<'a> JavaScriptAdapter<'a> {
    pub fn new(unit: &'a SourceUnit) -> Self {
        Self { unit }
    }
}

impl SourceAdapter for JavaScriptAdapter<'_> {
    fn content(&self) -> Result<String, TransformError> {
        Ok(self.unit.text.clone())
    }

    fn logical_file_name(&self) -> PathBuf {
        typescript_path(&self.unit.path)
    }
}

/// CoffeeScript transpiled to JavaScript, saved as `.ts`.
pub struct CoffeeScriptAdapter<'a> {
    unit: &'a SourceUnit,
    transpiler: &'a dyn Transpiler,
}

impl<'a> CoffeeScriptAdapter<'a> {
    pub fn new(unit: &'a SourceUnit, transpiler: &'a dyn Transpiler) -> Self {
        Self { unit, transpiler }
    }
}

impl SourceAdapter for CoffeeScriptAdapter<'_> {
    fn content(&self) -> Result<String, TransformError> {
        transpile(self.unit, self.transpiler)
    }

    fn logical_file_name(&self) -> PathBuf {
        typescript_path(&self.unit.path)
    }
}

/// CoffeeScript transpiled to JavaScript, saved as `.js`.
pub struct CoffeeToJsAdapter<'a> {
    unit: &'a SourceUnit,
    transpiler: &'a dyn Transpiler,
}

impl<'a> CoffeeToJsAdapter<'a> {
    pub fn new(unit: &'a SourceUnit, transpiler: &'a dyn Transpiler) -> Self {
        Self { unit, transpiler }
    }
}

impl SourceAdapter for CoffeeToJsAdapter<'_> {
    fn content(&self) -> Result<String, TransformError> {
        transpile(self.unit, self.transpiler)
    }

    fn logical_file_name(&self) -> PathBuf {
        self.unit.path.with_extension("js")
    }
}

fn transpile(unit: &SourceUnit, transpiler: &dyn Transpiler) -> Result<String, TransformError> {
    transpiler
        .transpile(&unit.text)
        .map_err(|source| TransformError::Tool {
            path: unit.path.clone(),
            tool: transpiler.info().name,
            source,
        })
}

/// Pick the adapter for a unit's language.
///
/// `to_javascript` selects the CoffeeScript → JavaScript view; it is only
/// meaningful for CoffeeScript sources.
pub fn adapter_for<'a>(
    unit: &'a SourceUnit,
    transpiler: &'a dyn Transpiler,
    to_javascript: bool,
) -> Result<Box<dyn SourceAdapter + 'a>, TransformError> {
    match (unit.language, to_javascript) {
        (Language::CoffeeScript, true) => Ok(Box::new(CoffeeToJsAdapter::new(unit, transpiler))),
        (Language::CoffeeScript, false) => {
            Ok(Box::new(CoffeeScriptAdapter::new(unit, transpiler)))
        }
        (_, true) => Err(TransformError::UnsupportedLanguage {
            path: unit.path.clone(),
        }),
        (Language::JavaScript, false) => Ok(Box::new(JavaScriptAdapter::new(unit))),
        (Language::TypeScript, false) => Ok(Box::new(TypeScriptAdapter::new(unit))),
    }
}
