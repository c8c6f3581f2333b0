//! Replace `@bind` method decorators with explicit constructor bindings.
//!
//! Files that import the `bind-decorator` package get one
//! `this.method = this.method.bind(this);` statement per decorated method,
//! placed in the constructor (synthesized when the class has none). The
//! decorators and the import are then dropped.

use crate::patterns;
use crate::rewrite::Rewrite;
use crate::traits::Transform;

/// Marker import that enables this rewrite.
pub const BIND_DECORATOR_IMPORT: &str = "import bind from 'bind-decorator'";

const BIND_TOKEN: &str = "@bind";
const SUPER_CALL: &str = "super();";

/// Rewrite `@bind` decorated methods into constructor bindings.
pub fn remove_bind_decorator(text: &str) -> Rewrite {
    if !text.contains(BIND_DECORATOR_IMPORT) {
        return Rewrite::Unchanged;
    }

    let methods = patterns::bind_sites(text);
    if methods.is_empty() {
        tracing::debug!("bind-decorator imported but no @bind sites found");
        return Rewrite::Unchanged;
    }

    let block = bind_block(&methods);
    let Some(with_binds) = insert_bindings(text, &block) else {
        tracing::debug!("no constructor or class header to hold bindings");
        return Rewrite::Unchanged;
    };

    let cleaned = strip_marker_import(&with_binds.replace(BIND_TOKEN, ""));
    Rewrite::from_output(text, cleaned)
}

/// Newline-led block of binding statements, two tabs deep.
fn bind_block(methods: &[String]) -> String {
    let mut block = String::from("\n");
    for name in methods {
        block.push_str(&format!("\t\tthis.{name} = this.{name}.bind(this);\n"));
    }
    block
}

fn insert_bindings(text: &str, block: &str) -> Option<String> {
    if patterns::first_constructor(text).is_some() {
        let at = match text.find(SUPER_CALL) {
            Some(pos) => pos + SUPER_CALL.len(),
            None => patterns::constructor_body_open(text)?,
        };
        return Some(splice(text, at, block));
    }

    let header = patterns::class_header(text)?;
    let constructor = if header.as_str().contains("extends") {
        format!("\n\tconstructor(){{\n\t\t{SUPER_CALL}{block}\t}}\n")
    } else {
        format!("\n\tconstructor(){{{block}\t}}\n")
    };
    Some(splice(text, header.end(), &constructor))
}

fn splice(text: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..at]);
    out.push_str(insert);
    out.push_str(&text[at..]);
    out
}

/// Remove the marker import together with its `;` and line terminator.
fn strip_marker_import(text: &str) -> String {
    let Some(start) = text.find(BIND_DECORATOR_IMPORT) else {
        return text.to_string();
    };
    let rest = &text[start + BIND_DECORATOR_IMPORT.len()..];
    let rest = rest.strip_prefix(';').unwrap_or(rest);
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);
    format!("{}{}", &text[..start], rest)
}

/// Registry entry for [`remove_bind_decorator`].
pub struct RemoveBindDecorator;

pub static REMOVE_BIND_DECORATOR: RemoveBindDecorator = RemoveBindDecorator;

impl Transform for RemoveBindDecorator {
    fn name(&self) -> &'static str {
        "remove-bind-decorator"
    }

    fn description(&self) -> &'static str {
        "Replace @bind decorators with explicit constructor bindings"
    }

    fn apply(&self, text: &str) -> Rewrite {
        remove_bind_decorator(text)
    }
}
