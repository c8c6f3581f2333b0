//! Output formatting for command results.
//!
//! Every result can print as compact text, colored text, or JSON through
//! the [`OutputFormatter`] trait.

use crate::apply::Applied;
use crate::batch::BatchOutcome;
use nu_ansi_term::Color;
use serde::Serialize;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Output format and display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, no colors.
    #[default]
    Compact,
    /// Text with colors if available.
    Pretty { colors: bool },
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Resolve from CLI flags and the terminal.
    pub fn from_cli(json: bool) -> Self {
        if json {
            return OutputFormat::Json;
        }
        if !std::io::stdout().is_terminal() {
            return OutputFormat::Compact;
        }
        OutputFormat::Pretty {
            colors: std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// Types that can be printed as text or JSON.
pub trait OutputFormatter: Serialize {
    /// Format as plain text.
    fn format_text(&self) -> String;

    /// Format as colored text. Defaults to [`format_text`](Self::format_text).
    fn format_pretty(&self) -> String {
        self.format_text()
    }

    /// Print to stdout in the given format.
    fn print(&self, format: &OutputFormat) -> std::io::Result<()> {
        let text = match format {
            OutputFormat::Compact | OutputFormat::Pretty { colors: false } => self.format_text(),
            OutputFormat::Pretty { colors: true } => self.format_pretty(),
            OutputFormat::Json => serde_json::to_string(self).map_err(std::io::Error::other)?,
        };
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }
}

impl OutputFormatter for BatchOutcome {
    fn format_text(&self) -> String {
        let mut lines = vec![format!("Files converted: {}", self.processed)];
        if !self.failed.is_empty() {
            lines.push("Files that could not be converted:".to_string());
            lines.extend(self.failed.iter().map(|p| format!("  {}", p.display())));
        }
        lines.join("\n")
    }

    fn format_pretty(&self) -> String {
        let mut lines = vec![format!(
            "Files converted: {}",
            Color::Green.bold().paint(self.processed.to_string())
        )];
        if self.unchanged > 0 {
            lines.push(
                Color::DarkGray
                    .paint(format!("  ({} already up to date)", self.unchanged))
                    .to_string(),
            );
        }
        if !self.failed.is_empty() {
            lines.push(format!(
                "{}",
                Color::Red.bold().paint("Files that could not be converted:")
            ));
            lines.extend(
                self.failed
                    .iter()
                    .map(|p| format!("  {}", Color::Red.paint(p.display().to_string()))),
            );
        }
        lines.join("\n")
    }
}

/// Result of a single-file command.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub changed: bool,
}

impl From<Applied> for FileReport {
    fn from(applied: Applied) -> Self {
        Self {
            path: applied.path,
            changed: applied.changed,
        }
    }
}

impl OutputFormatter for FileReport {
    fn format_text(&self) -> String {
        if self.changed {
            format!("{}", self.path.display())
        } else {
            format!("{} (unchanged)", self.path.display())
        }
    }

    fn format_pretty(&self) -> String {
        if self.changed {
            Color::Green.paint(self.path.display().to_string()).to_string()
        } else {
            format!(
                "{} {}",
                self.path.display(),
                Color::DarkGray.paint("(unchanged)")
            )
        }
    }
}

/// One registered transform.
#[derive(Debug, Clone, Serialize)]
pub struct TransformInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Listing of registered transforms.
#[derive(Debug, Clone, Serialize)]
pub struct TransformList {
    pub transforms: Vec<TransformInfo>,
}

impl OutputFormatter for TransformList {
    fn format_text(&self) -> String {
        let width = self
            .transforms
            .iter()
            .map(|t| t.name.len())
            .max()
            .unwrap_or(0);
        self.transforms
            .iter()
            .map(|t| format!("{:width$}  {}", t.name, t.description))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_pretty(&self) -> String {
        let width = self
            .transforms
            .iter()
            .map(|t| t.name.len())
            .max()
            .unwrap_or(0);
        self.transforms
            .iter()
            .map(|t| {
                let name = format!("{:width$}", t.name);
                format!("{}  {}", Color::Cyan.paint(name), t.description)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_text() {
        let outcome = BatchOutcome {
            processed: 2,
            unchanged: 1,
            failed: vec![PathBuf::from("src/b.ts"), PathBuf::from("src/c.ts")],
        };
        assert_eq!(
            outcome.format_text(),
            "Files converted: 2\nFiles that could not be converted:\n  src/b.ts\n  src/c.ts"
        );
    }

    #[test]
    fn test_batch_text_without_failures() {
        let outcome = BatchOutcome {
            processed: 0,
            ..Default::default()
        };
        assert_eq!(outcome.format_text(), "Files converted: 0");
    }

    #[test]
    fn test_batch_json() {
        let outcome = BatchOutcome {
            processed: 1,
            unchanged: 0,
            failed: vec![PathBuf::from("x.ts")],
        };
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["processed"], 1);
        assert_eq!(json["failed"][0], "x.ts");
    }

    #[test]
    fn test_transform_list_is_aligned() {
        let list = TransformList {
            transforms: vec![
                TransformInfo {
                    name: "a",
                    description: "first",
                },
                TransformInfo {
                    name: "abc",
                    description: "second",
                },
            ],
        };
        assert_eq!(list.format_text(), "a    first\nabc  second");
    }
}
