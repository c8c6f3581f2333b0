//! Adapters for the external tools totypescript delegates to.
//!
//! Two collaborators sit outside the rewrite engine:
//! - a [`Transpiler`] that turns CoffeeScript into JavaScript
//!   (`decaffeinate` by default),
//! - a [`CodeFixer`] that applies TypeScript combined code fixes through a
//!   language-service command.
//!
//! Both are plain processes fed on stdin and read back on stdout.

pub mod adapters;
mod tools;

use serde::{Deserialize, Serialize};

pub use adapters::{CommandFixer, Decaffeinate};
pub use tools::{find_js_tool, run_with_stdin};

/// Static description of an external tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolInfo {
    /// Tool name (e.g., "decaffeinate")
    pub name: &'static str,
    /// Project homepage
    pub website: &'static str,
}

/// Error from running an external tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("tool not available: {0}")]
    NotAvailable(String),

    #[error("failed to run tool: {0}")]
    Io(#[from] std::io::Error),

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("invalid tool output: {0}")]
    Output(String),

    #[error("invalid fix request: {0}")]
    Json(#[from] serde_json::Error),
}

/// Converts CoffeeScript source to JavaScript.
pub trait Transpiler: Send + Sync {
    fn info(&self) -> &ToolInfo;

    /// Check if the tool can be run.
    fn is_available(&self) -> bool;

    /// Transpile a whole CoffeeScript file.
    fn transpile(&self, source: &str) -> Result<String, ToolError>;
}

/// Editor formatting settings forwarded to the code-fix collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatSettings {
    pub indent_size: u32,
    pub tab_size: u32,
    pub convert_tabs_to_spaces: bool,
    #[serde(rename = "newLineCharacter")]
    pub new_line: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            indent_size: 2,
            tab_size: 2,
            convert_tabs_to_spaces: true,
            new_line: "\n".to_string(),
        }
    }
}

/// One file's worth of combined code fixes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixRequest<'a> {
    /// Logical (TypeScript) file name
    pub file_name: &'a str,
    /// Current file text
    pub text: &'a str,
    /// Combined code fix ids, applied in order
    pub fix_ids: &'a [String],
    /// Formatting used for inserted code
    pub format: &'a FormatSettings,
}

/// Applies TypeScript combined code fixes to a file's text.
pub trait CodeFixer: Send + Sync {
    fn info(&self) -> &ToolInfo;

    /// Apply every fix id in `request` and return the new text.
    fn apply_fixes(&self, request: &FixRequest<'_>) -> Result<String, ToolError>;
}
