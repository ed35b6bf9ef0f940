//! URL slug derivation for named entities (categories, blogs, products).
//!
//! Forms auto-fill the slug field from the name; an operator may edit the
//! slug afterwards, and edited values pass through the same transform.
//! The transform is idempotent, so an already-valid slug survives unchanged.

/// Derive a URL slug from free-form text.
///
/// Lowercases, replaces whitespace and punctuation runs with a single
/// hyphen, and trims leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use bloomcart_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("Gift Sets!!"), "gift-sets");
/// assert_eq!(generate_slug("Flowers"), "flowers");
/// assert_eq!(generate_slug("gift-sets"), "gift-sets");
/// ```
pub fn generate_slug(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            // Whitespace, punctuation, and symbols all act as separators.
            pending_hyphen = true;
        }
    }

    slug
}
