//! URL slugs for server, realm and item names.

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, drops quotes and any character that is not an ASCII word
/// character, whitespace or hyphen, then joins the remaining words with single
/// hyphens. Lossy: `"Bob's Axe"` and `"Bobs Axe"` both give `"bobs-axe"`.
pub fn to_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
    }

    slug
}

/// Best-effort display name from a slug: hyphens become spaces and each word
/// is capitalised. Not an inverse of [`to_slug`].
pub fn from_slug(slug: &str) -> String {
    let mut name = String::with_capacity(slug.len());
    let mut prev_is_word = false;

    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            name.push(c.to_ascii_uppercase());
        } else {
            name.push(c);
        }
        prev_is_word = is_word;
    }

    name
}
