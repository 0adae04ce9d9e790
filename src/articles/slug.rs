// src/articles/slug.rs
//! URL-safe slug derivation from article titles.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derive a URL-safe slug from a title.
///
/// Lower-cases, strips diacritics (NFD decomposition, combining marks
/// dropped), removes everything outside ASCII alphanumerics, underscore,
/// whitespace and hyphen, turns whitespace runs into single hyphens,
/// collapses repeated hyphens and trims them from the ends.
///
/// No uniqueness suffix is added here; the slug column's UNIQUE constraint
/// owns collision detection.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut slug = String::with_capacity(stripped.len());
    let mut prev_hyphen = false;

    for c in stripped.chars() {
        if c.is_whitespace() || c == '-' {
            if !prev_hyphen && !slug.is_empty() {
                slug.push('-');
                prev_hyphen = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
            prev_hyphen = false;
        }
        // everything else is dropped
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}
