//! Declare underscore-prefixed constructor parameters as class members.
//!
//! Convention: `__name` is private, `_name` is protected.

use crate::patterns;
use crate::rewrite::Rewrite;
use crate::traits::Transform;
use regex::Captures;

/// Add `private`/`protected` to the first constructor's underscore parameters.
pub fn insert_access_modifiers(text: &str) -> Rewrite {
    let Some(constructor) = patterns::first_constructor(text) else {
        return Rewrite::Unchanged;
    };

    let params = constructor.as_str();
    let rewritten = patterns::underscore_parameters().replace_all(params, |caps: &Captures| {
        let name = &caps["name"];
        match access_modifier_for(name) {
            Some(modifier) => format!("{}{}{} {}", &caps["lead"], &caps["ws"], modifier, name),
            None => caps[0].to_string(),
        }
    });

    if rewritten == params {
        return Rewrite::Unchanged;
    }

    let mut out = String::with_capacity(text.len() + 32);
    out.push_str(&text[..constructor.start()]);
    out.push_str(&rewritten);
    out.push_str(&text[constructor.end()..]);
    Rewrite::Changed(out)
}

/// Modifier implied by a parameter name, if any.
pub fn access_modifier_for(name: &str) -> Option<&'static str> {
    if name.starts_with("__") {
        Some("private")
    } else if name.starts_with('_') && name.len() > 1 {
        Some("protected")
    } else {
        None
    }
}

/// Registry entry for [`insert_access_modifiers`].
pub struct InsertAccessModifiers;

pub static INSERT_ACCESS_MODIFIERS: InsertAccessModifiers = InsertAccessModifiers;

impl Transform for InsertAccessModifiers {
    fn name(&self) -> &'static str {
        "access-modifiers"
    }

    fn description(&self) -> &'static str {
        "Declare __params private and _params protected in the constructor"
    }

    fn apply(&self, text: &str) -> Rewrite {
        insert_access_modifiers(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_modifier_for() {
        assert_eq!(access_modifier_for("__store"), Some("private"));
        assert_eq!(access_modifier_for("_view"), Some("protected"));
        assert_eq!(access_modifier_for("_"), None);
        assert_eq!(access_modifier_for("plain"), None);
    }

    #[test]
    fn test_rewrites_first_and_following_parameters() {
        let text = "class A {\n  constructor(__a: A, _b: B, c: C) {}\n}";
        let out = insert_access_modifiers(text).into_text(text);
        assert_eq!(
            out,
            "class A {\n  constructor(private __a: A, protected _b: B, c: C) {}\n}"
        );
    }

    #[test]
    fn test_multiline_parameters() {
        let text = "constructor(\n    __model,\n    _view\n) {}";
        let out = insert_access_modifiers(text).into_text(text);
        assert_eq!(out, "constructor(\n    private __model,\n    protected _view\n) {}");
    }

    #[test]
    fn test_only_first_constructor() {
        let text = "constructor(_a) {}\nconstructor(_b) {}";
        let out = insert_access_modifiers(text).into_text(text);
        assert_eq!(out, "constructor(protected _a) {}\nconstructor(_b) {}");
    }

    #[test]
    fn test_idempotent() {
        let text = "constructor(__a, _b) {}";
        let once = insert_access_modifiers(text).into_text(text);
        assert_eq!(insert_access_modifiers(&once), Rewrite::Unchanged);
    }

    #[test]
    fn test_no_constructor() {
        assert_eq!(insert_access_modifiers("function f(_a) {}"), Rewrite::Unchanged);
    }
}
