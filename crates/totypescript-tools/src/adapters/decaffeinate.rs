//! decaffeinate adapter - CoffeeScript to modern JavaScript.
//!
//! https://decaffeinate-project.org/

use super::split_command;
use crate::{ToolError, ToolInfo, Transpiler};
use std::path::{Path, PathBuf};

const DECAFFEINATE_INFO: ToolInfo = ToolInfo {
    name: "decaffeinate",
    website: "https://decaffeinate-project.org/",
};

/// CoffeeScript transpiler backed by the `decaffeinate` CLI.
///
/// With no file arguments decaffeinate reads stdin and writes stdout.
pub struct Decaffeinate {
    root: PathBuf,
    command: Option<Vec<String>>,
}

impl Decaffeinate {
    /// Resolve `decaffeinate` relative to a project root.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            command: None,
        }
    }

    /// Use an explicit command line instead of looking the tool up.
    pub fn with_command(mut self, command: Vec<String>) -> Self {
        if !command.is_empty() {
            self.command = Some(command);
        }
        self
    }

    fn resolve(&self) -> Option<(PathBuf, Vec<String>)> {
        match &self.command {
            Some(command) => split_command(command),
            None => crate::find_js_tool("decaffeinate", &self.root).map(|p| (p, Vec::new())),
        }
    }
}

impl Transpiler for Decaffeinate {
    fn info(&self) -> &ToolInfo {
        &DECAFFEINATE_INFO
    }

    fn is_available(&self) -> bool {
        match self.resolve() {
            Some((program, _)) if program.components().count() > 1 => program.is_file(),
            Some((program, _)) => which::which(&program).is_ok(),
            None => false,
        }
    }

    fn transpile(&self, source: &str) -> Result<String, ToolError> {
        let (program, args) = self
            .resolve()
            .ok_or_else(|| ToolError::NotAvailable("decaffeinate not found".to_string()))?;
        crate::run_with_stdin(&program, &args, source, &self.root)
    }
}
