//! Outcome of running a transform over a text buffer.

/// Result of a text rewrite.
///
/// A transform either produces a complete new buffer or reports that its
/// pattern was not found. Partial edits are never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The pattern applied; holds the full new text.
    Changed(String),
    /// No applicable pattern; the input stands as is.
    Unchanged,
}

impl Rewrite {
    /// Build from a candidate output, collapsing to `Unchanged` when it
    /// equals the input.
    pub fn from_output(input: &str, output: String) -> Self {
        if output == input {
            Rewrite::Unchanged
        } else {
            Rewrite::Changed(output)
        }
    }

    /// Resolve to the final text, falling back to `original`.
    pub fn into_text(self, original: &str) -> String {
        match self {
            Rewrite::Changed(text) => text,
            Rewrite::Unchanged => original.to_string(),
        }
    }
}
