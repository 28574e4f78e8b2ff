//! Category path resolution
//!
//! A requested category is addressed by a colon separated path of name
//! tokens, e.g. `network:dns:resolution`. Resolution walks the tree token by
//! token and fails the whole run when any token cannot be matched.

use crate::common::{Error, Result};
use crate::suite::model::Category;

/// Resolve a colon separated category path inside the suite tree
///
/// Name matching is case-insensitive. When several siblings share a name the
/// first one in declaration order wins. A matched category that defines a
/// `test-suite` list scopes the next token to that list; one that doesn't
/// becomes the sole candidate itself, so a path may repeat a leaf name and
/// still resolve to it.
pub fn resolve<'a>(categories: &'a [Category], path: &str) -> Result<&'a Category> {
    let mut scope = categories;
    let mut resolved: Option<&Category> = None;

    for token in path.split(':') {
        let matched = scope
            .iter()
            .find(|category| category.name.to_lowercase() == token.to_lowercase());

        match matched {
            Some(category) => {
                scope = category
                    .children
                    .as_deref()
                    .unwrap_or(std::slice::from_ref(category));
                resolved = Some(category);
            }
            None => return Err(Error::category_not_found(token, path)),
        }
    }

    resolved.ok_or_else(|| Error::category_not_found(path, path))
}
