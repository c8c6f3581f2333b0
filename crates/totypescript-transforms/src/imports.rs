//! Turn an AMD `define([...], function(...) {` wrapper into ES imports.
//!
//! The dependency list and the factory parameters are paired by position:
//!
//! ```text
//! define([                          import A from './a';
//!   "./a",                          import B from './b';
//!   "./b",
//! ], function(            ─────►    ...module body...
//!   A: typeof A,
//!   B: typeof B,
//! ) {
//!   ...module body...
//! });
//! ```

use crate::patterns;
use crate::rewrite::Rewrite;
use crate::traits::Transform;

const MODULE_CLOSER: &str = "});";
const LINE_BREAK: &str = "\r\n";

/// Build the sorted import block for the first `define(...)` header.
///
/// Returns an empty string when the text has no header.
pub fn generate_imports(text: &str) -> String {
    let Some(header) = patterns::define_header(text) else {
        return String::new();
    };

    let (dependencies, parameters) = split_define_header(header.as_str());
    if dependencies.len() != parameters.len() {
        tracing::warn!(
            dependencies = dependencies.len(),
            parameters = parameters.len(),
            "define() dependency and parameter counts differ, pairing by position"
        );
    }

    let mut imports: Vec<String> = dependencies
        .iter()
        .zip(&parameters)
        .map(|(dependency, parameter)| import_line(parameter, dependency))
        .collect();
    sort_imports(&mut imports);

    let mut block = imports.join(LINE_BREAK);
    block.push_str(LINE_BREAK);
    block
}

/// Drop every `define(...) {` header and the module's closing `});`.
pub fn remove_define_wrapper(text: &str) -> String {
    let stripped = patterns::define_headers().replace_all(text, "");
    match stripped.strip_suffix(MODULE_CLOSER) {
        Some(body) => body.to_string(),
        None => stripped.into_owned(),
    }
}

/// Replace the AMD wrapper with the generated import block.
pub fn regenerate_imports_from_define(text: &str) -> Rewrite {
    if patterns::define_header(text).is_none() {
        return Rewrite::Unchanged;
    }
    let mut out = generate_imports(text);
    out.push_str(&remove_define_wrapper(text));
    Rewrite::from_output(text, out)
}

/// Split a header into dependency paths and parameter names.
///
/// One-item-per-line headers are split by lines: the first and last lines
/// (`define([` and `) {`) are discarded, the middle `], function(` line is
/// dropped, the rest halves into dependencies and parameters. Any other
/// layout is split on the bracketed lists.
fn split_define_header(header: &str) -> (Vec<String>, Vec<String>) {
    let lines: Vec<&str> = header.split('\n').collect();
    if lines.len() > 2 {
        let mut inner = lines[1..lines.len() - 1].to_vec();
        if inner.len() % 2 == 1 && inner[inner.len() / 2].trim_start().starts_with(']') {
            inner.remove(inner.len() / 2);
            let half = inner.len() / 2;
            let (dependencies, parameters) = inner.split_at(half);
            return (
                dependencies.iter().map(|d| dependency_path(d)).collect(),
                parameters.iter().map(|p| parameter_name(p)).collect(),
            );
        }
    }
    split_bracketed(header)
}

fn split_bracketed(header: &str) -> (Vec<String>, Vec<String>) {
    let Some(open) = header.find('[') else {
        return (Vec::new(), Vec::new());
    };
    let Some(close) = header[open..].find(']').map(|i| open + i) else {
        return (Vec::new(), Vec::new());
    };
    let dependencies = split_items(&header[open + 1..close])
        .iter()
        .map(|d| dependency_path(d))
        .collect();

    let after = &header[close..];
    let parameters = match (after.find('('), after.rfind(')')) {
        (Some(start), Some(end)) if start < end => split_items(&after[start + 1..end])
            .iter()
            .map(|p| parameter_name(p))
            .collect(),
        _ => Vec::new(),
    };
    (dependencies, parameters)
}

/// Split on top-level commas, ignoring commas nested in `<>`, `()`, `{}`, `[]`.
fn split_items(list: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '<' | '(' | '{' | '[' => depth += 1,
            '>' | ')' | '}' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&list[start..]);
    items.into_iter().filter(|item| !item.trim().is_empty()).collect()
}

/// Text before the first `:`, trimmed, trailing comma stripped.
fn parameter_name(item: &str) -> String {
    let name = item.split(':').next().unwrap_or(item).trim();
    name.strip_suffix(',').unwrap_or(name).trim().to_string()
}

/// Trimmed path with its trailing comma stripped and single quotes.
fn dependency_path(item: &str) -> String {
    let path = item.trim();
    path.strip_suffix(',')
        .unwrap_or(path)
        .trim()
        .replace('"', "'")
}

fn import_line(parameter: &str, dependency: &str) -> String {
    if dependency.starts_with('\'') {
        format!("import {parameter} from {dependency};")
    } else {
        format!("import {parameter} from '{dependency}';")
    }
}

/// Order by the line without `"{ "`, the way a locale compare does:
/// punctuation before digits before letters, case only breaking ties.
fn sort_imports(imports: &mut [String]) {
    imports.sort_by_cached_key(|line| {
        let raw = line.replace("{ ", "");
        (collation_key(&raw), raw)
    });
}

fn collation_key(text: &str) -> Vec<(u8, char)> {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            let class = if c.is_alphabetic() {
                2
            } else if c.is_numeric() {
                1
            } else {
                0
            };
            (class, c)
        })
        .collect()
}

/// Registry entry for [`regenerate_imports_from_define`].
pub struct RegenerateImports;

pub static REGENERATE_IMPORTS: RegenerateImports = RegenerateImports;

impl Transform for RegenerateImports {
    fn name(&self) -> &'static str {
        "define-to-imports"
    }

    fn description(&self) -> &'static str {
        "Replace an AMD define() wrapper with import statements"
    }

    fn apply(&self, text: &str) -> Rewrite {
        regenerate_imports_from_define(text)
    }
}
