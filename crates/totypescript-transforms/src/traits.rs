//! Trait for text transforms.

use crate::rewrite::Rewrite;

/// A stateless text-to-text rewrite.
///
/// Implementations must be total: any input yields either a complete new
/// buffer or [`Rewrite::Unchanged`].
pub trait Transform: Send + Sync {
    /// Transform identifier (e.g., "access-modifiers").
    fn name(&self) -> &'static str;

    /// One-line summary for listings.
    fn description(&self) -> &'static str;

    /// Rewrite a whole-file buffer.
    fn apply(&self, text: &str) -> Rewrite;
}
