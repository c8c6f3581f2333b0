//! Pattern-based source rewrites used when migrating code to TypeScript.
//!
//! Every transform here works on raw text, not on a syntax tree. They are
//! written against a narrow set of coding conventions and are only reliable
//! for those:
//!
//! ```text
//! rewrite                  input pattern                      output
//! ─────────────────────    ───────────────────────────────    ──────────────────────────────
//! remove-bind-decorator    @bind method() + bind-decorator    this.method = this.method.bind(this);
//! access-modifiers         constructor(__a, _b)               constructor(private __a, protected _b)
//! define-to-imports        define([...], function(...) {      import A from './a';
//! ```
//!
//! # Example
//!
//! ```
//! use totypescript_transforms::{Rewrite, insert_access_modifiers};
//!
//! let out = insert_access_modifiers("constructor(_store: Store) {}");
//! assert_eq!(out, Rewrite::Changed("constructor(protected _store: Store) {}".into()));
//! ```
//!
//! All transforms are total: input without the target pattern comes back as
//! [`Rewrite::Unchanged`], never as an error.

pub mod bind;
pub mod imports;
pub mod modifiers;
pub mod patterns;
pub mod registry;
pub mod rewrite;
pub mod traits;

// Re-exports: rewrite functions
pub use bind::{BIND_DECORATOR_IMPORT, remove_bind_decorator};
pub use imports::{generate_imports, regenerate_imports_from_define, remove_define_wrapper};
pub use modifiers::insert_access_modifiers;

// Re-exports: outcome and traits
pub use rewrite::Rewrite;
pub use traits::Transform;

// Re-exports: registry
pub use registry::{register_transform, transform_for_name, transforms};
