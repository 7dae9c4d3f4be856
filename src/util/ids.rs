//! Identifier and slug generation.

use std::collections::HashSet;

use uuid::Uuid;

/// Generate a new opaque identifier (UUID v4, hyphenated).
#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Convert a display name into a URL slug.
///
/// ASCII letters and digits are kept (lowercased); every other run of
/// characters collapses into a single `-`. Leading and trailing dashes are
/// trimmed, so `"  Acme Freight, LLC "` becomes `"acme-freight-llc"`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Slugify `name` and append `-2`, `-3`, ... until the result is not in `taken`.
///
/// An empty slug (name had no ASCII alphanumerics) falls back to `"org"`.
#[must_use]
pub fn unique_slug(name: &str, taken: &HashSet<String>) -> String {
    let mut base = slugify(name);
    if base.is_empty() {
        base.push_str("org");
    }
    if !taken.contains(&base) {
        return base;
    }
    (2u32..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or(base)
}
