//! Named text patterns the rewrites are built on.
//!
//! Each regex sits behind a small extractor so the matching can be tested on
//! its own and swapped for a real parser without touching the rewrites.

use regex::{Match, Regex};
use std::sync::LazyLock;

/// `@bind` followed (lazily, across line breaks) by the text up to `(`.
static BIND_SITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@bind([\s\S]*?)\(").expect("valid bind pattern"));

/// `constructor(` up to the first `)`.
static CONSTRUCTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"constructor\([\s\S]*?\)").expect("valid constructor pattern"));

/// Constructor parameter list plus one character and the body brace.
static CONSTRUCTOR_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"constructor\([\s\S]*?\).\{").expect("valid constructor body pattern")
});

/// A class declaration up to its opening brace.
static CLASS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:export[ \t]+(?:default[ \t]+)?)?(?:abstract[ \t]+)?class\b[^{]*\{")
        .expect("valid class header pattern")
});

/// AMD `define(` header up to `) {`.
static DEFINE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"define\([\s\S]*?\) \{").expect("valid define pattern"));

/// An underscore-prefixed name at the start of a parameter.
static UNDERSCORE_PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<lead>[(,])(?P<ws>\s*)(?P<name>_[A-Za-z0-9_$]*)")
        .expect("valid parameter pattern")
});

const ACCESS_KEYWORDS: &[&str] = &["private", "protected"];

/// Method names of all `@bind` sites, in source order.
pub fn bind_sites(text: &str) -> Vec<String> {
    BIND_SITE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| method_name(m.as_str()))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Strip surrounding whitespace and a leading `private`/`protected`.
pub fn method_name(raw: &str) -> String {
    let name = raw.trim();
    for keyword in ACCESS_KEYWORDS {
        if let Some(rest) = name.strip_prefix(keyword) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim().to_string();
            }
        }
    }
    name.to_string()
}

/// The first `constructor(...)` parameter list.
pub fn first_constructor(text: &str) -> Option<Match<'_>> {
    CONSTRUCTOR.find(text)
}

/// Byte offset just past the first constructor's opening body brace.
pub fn constructor_body_open(text: &str) -> Option<usize> {
    CONSTRUCTOR_BODY.find(text).map(|m| m.end())
}

/// The first class declaration header, through its `{`.
pub fn class_header(text: &str) -> Option<Match<'_>> {
    CLASS_HEADER.find(text)
}

/// The first AMD `define(...) {` header.
pub fn define_header(text: &str) -> Option<Match<'_>> {
    DEFINE_HEADER.find(text)
}

/// Regex matching every AMD header, for removal.
pub fn define_headers() -> &'static Regex {
    &DEFINE_HEADER
}

/// Regex matching underscore-prefixed names that open a parameter.
///
/// Captures `lead` (`(` or `,`), `ws` (whitespace, line breaks included)
/// and `name`.
pub fn underscore_parameters() -> &'static Regex {
    &UNDERSCORE_PARAMETER
}
