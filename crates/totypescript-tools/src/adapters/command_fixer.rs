//! Code fixes through a language-service command.
//!
//! The command receives a JSON [`FixRequest`] on stdin:
//!
//! ```json
//! {
//!   "fileName": "src/app.ts",
//!   "text": "...",
//!   "fixIds": ["requireInTs", "fixUnreachableCode"],
//!   "format": { "indentSize": 2, "tabSize": 2, "convertTabsToSpaces": true, "newLineCharacter": "\n" }
//! }
//! ```
//!
//! and prints the fixed file text on stdout. A thin Node script over the
//! TypeScript language service (`getCombinedCodeFix`) fits this contract.

use super::split_command;
use crate::{CodeFixer, FixRequest, ToolError, ToolInfo};
use std::path::{Path, PathBuf};

const COMMAND_FIXER_INFO: ToolInfo = ToolInfo {
    name: "code-fixes",
    website: "https://github.com/microsoft/TypeScript/wiki/Using-the-Language-Service-API",
};

/// Code fixer that shells out to a configured command.
pub struct CommandFixer {
    root: PathBuf,
    program: PathBuf,
    args: Vec<String>,
}

impl CommandFixer {
    /// Build from a command line; `None` when it is empty.
    pub fn new(root: &Path, command: &[String]) -> Option<Self> {
        let (program, args) = split_command(command)?;
        Some(Self {
            root: root.to_path_buf(),
            program,
            args,
        })
    }
}

impl CodeFixer for CommandFixer {
    fn info(&self) -> &ToolInfo {
        &COMMAND_FIXER_INFO
    }

    fn apply_fixes(&self, request: &FixRequest<'_>) -> Result<String, ToolError> {
        let payload = serde_json::to_string(request)?;
        crate::run_with_stdin(&self.program, &self.args, &payload, &self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatSettings;

    #[test]
    fn test_empty_command() {
        assert!(CommandFixer::new(Path::new("."), &[]).is_none());
    }

    #[test]
    #[cfg(unix)]
    fn test_request_is_sent_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let fixer = CommandFixer::new(dir.path(), &["cat".to_string()]).unwrap();
        let fix_ids = vec!["requireInTs".to_string()];
        let format = FormatSettings::default();
        let request = FixRequest {
            file_name: "a.ts",
            text: "const x = require(\"y\");",
            fix_ids: &fix_ids,
            format: &format,
        };

        let echoed: serde_json::Value =
            serde_json::from_str(&fixer.apply_fixes(&request).unwrap()).unwrap();
        assert_eq!(echoed["fileName"], "a.ts");
        assert_eq!(echoed["fixIds"][0], "requireInTs");
        assert_eq!(echoed["format"]["newLineCharacter"], "\n");
        assert_eq!(echoed["format"]["convertTabsToSpaces"], true);
    }
}
