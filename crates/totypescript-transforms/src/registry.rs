//! Registry of available transforms.

use crate::traits::Transform;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Global transform registry.
static TRANSFORMS: RwLock<Vec<&'static dyn Transform>> = RwLock::new(Vec::new());
static TRANSFORMS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom transform.
pub fn register_transform(transform: &'static dyn Transform) {
    init_transforms();
    TRANSFORMS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(transform);
}

fn init_transforms() {
    TRANSFORMS_INITIALIZED.get_or_init(|| {
        let mut transforms = TRANSFORMS.write().unwrap_or_else(PoisonError::into_inner);
        transforms.push(&crate::bind::REMOVE_BIND_DECORATOR);
        transforms.push(&crate::modifiers::INSERT_ACCESS_MODIFIERS);
        transforms.push(&crate::imports::REGENERATE_IMPORTS);
    });
}

/// Get a transform by name.
pub fn transform_for_name(name: &str) -> Option<&'static dyn Transform> {
    init_transforms();
    TRANSFORMS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find(|t| t.name() == name)
        .copied()
}

/// Get all registered transforms.
pub fn transforms() -> Vec<&'static dyn Transform> {
    init_transforms();
    TRANSFORMS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::Rewrite;

    #[test]
    fn test_builtin_lookup() {
        let transform = transform_for_name("access-modifiers").expect("access-modifiers");
        assert_eq!(
            transform.apply("constructor(__a) {}"),
            Rewrite::Changed("constructor(private __a) {}".into())
        );
        assert!(transform_for_name("define-to-imports").is_some());
        assert!(transform_for_name("remove-bind-decorator").is_some());
        assert!(transform_for_name("nope").is_none());
    }

    struct Upper;

    impl Transform for Upper {
        fn name(&self) -> &'static str {
            "upper"
        }

        fn description(&self) -> &'static str {
            "Uppercase everything"
        }

        fn apply(&self, text: &str) -> Rewrite {
            Rewrite::from_output(text, text.to_uppercase())
        }
    }

    static UPPER: Upper = Upper;

    #[test]
    fn test_register_custom_transform() {
        register_transform(&UPPER);
        let transform = transform_for_name("upper").expect("registered");
        assert_eq!(transform.apply("ab"), Rewrite::Changed("AB".into()));
        assert!(transforms().len() >= 4);
    }
}
