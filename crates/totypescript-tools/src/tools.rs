//! Locating and running external commands.

use crate::ToolError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Find a Node tool: project `node_modules/.bin` (searching upward from
/// `root`) first, then `PATH`.
pub fn find_js_tool(name: &str, root: &Path) -> Option<PathBuf> {
    for dir in root.ancestors() {
        let candidate = dir.join("node_modules").join(".bin").join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    which::which(name).ok()
}

/// Run `program args...` in `cwd`, feed `input` on stdin, return stdout.
pub fn run_with_stdin(
    program: &Path,
    args: &[String],
    input: &str,
    cwd: &Path,
) -> Result<String, ToolError> {
    let tool = program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string());
    tracing::debug!(tool = %tool, ?args, "running external tool");

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // stdin must be written concurrently with draining stdout.
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| ToolError::Output(format!("{tool}: stdin unavailable")))?;
    let input = input.to_string();
    let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

    let output = child.wait_with_output()?;
    let written = writer
        .join()
        .map_err(|_| ToolError::Output(format!("{tool}: stdin writer panicked")))?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            tool,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    // exited cleanly without reading all of stdin (`EPIPE`): output is not a result
    written?;

    String::from_utf8(output.stdout)
        .map_err(|e| ToolError::Output(format!("{tool} wrote non-UTF-8 output: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_js_tool_prefers_local_bin() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("node_modules").join(".bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("decaffeinate"), "").unwrap();
        let nested = dir.path().join("src").join("app");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_js_tool("decaffeinate", &nested),
            Some(bin.join("decaffeinate"))
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_run_with_stdin_echoes() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_with_stdin(Path::new("cat"), &[], "x = 1\n", dir.path()).unwrap();
        assert_eq!(out, "x = 1\n");
    }

    #[test]
    #[cfg(unix)]
    fn test_unread_stdin_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = "var x = 1;\n".repeat(20_000);
        let err = run_with_stdin(Path::new("true"), &[], &input, dir.path()).unwrap_err();
        match err {
            ToolError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_failed_status_wins_over_unread_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec!["-c".to_string(), "exit 2".to_string()];
        let input = "x".repeat(200_000);
        let err = run_with_stdin(Path::new("sh"), &args, &input, dir.path()).unwrap_err();
        assert!(matches!(err, ToolError::Failed { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_with_stdin_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec!["-c".to_string(), "echo broken >&2; exit 3".to_string()];
        let err = run_with_stdin(Path::new("sh"), &args, "", dir.path()).unwrap_err();
        match err {
            ToolError::Failed { tool, stderr, .. } => {
                assert_eq!(tool, "sh");
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
