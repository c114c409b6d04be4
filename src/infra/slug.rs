//! Slug derivation and validation for note URLs.

use deunicode::deunicode;
use regex::Regex;

const MAX_LENGTH: usize = 50;

/// Derives a URL-friendly slug from a note title.
///
/// - Transliterates non-ASCII text (Cyrillic, accents, CJK) to ASCII
/// - Converts to lowercase
/// - Replaces spaces with hyphens
/// - Keeps only alphanumeric characters, hyphens, and underscores
/// - Collapses consecutive hyphens
/// - Trims leading/trailing hyphens
/// - Truncates to 50 characters (at word boundary if possible)
/// - Returns "untitled" for empty results
///
/// # Examples
///
/// ```
/// use jot::infra::derive_slug;
///
/// assert_eq!(derive_slug("API Design"), "api-design");
/// assert_eq!(derive_slug("Новый заголовок"), "novyi-zagolovok");
/// assert_eq!(derive_slug(""), "untitled");
/// ```
pub fn derive_slug(title: &str) -> String {
    // Transliterate first so non-Latin titles keep their letters
    // instead of being filtered down to "untitled"
    let ascii = deunicode(title);
    let lower = ascii.to_lowercase();

    // Replace spaces with hyphens and filter invalid characters
    let mut result = String::new();
    for c in lower.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
        } else if c == ' ' || c == '-' || c == '_' {
            result.push(if c == ' ' { '-' } else { c });
        }
        // Skip all other characters
    }

    // Collapse consecutive hyphens
    let mut collapsed = String::new();
    let mut prev_was_hyphen = false;
    for c in result.chars() {
        if c == '-' {
            if !prev_was_hyphen {
                collapsed.push(c);
            }
            prev_was_hyphen = true;
        } else {
            collapsed.push(c);
            prev_was_hyphen = false;
        }
    }

    // Trim leading and trailing hyphens
    let trimmed = collapsed.trim_matches('-');

    if trimmed.is_empty() {
        return "untitled".to_string();
    }

    if trimmed.len() <= MAX_LENGTH {
        return trimmed.to_string();
    }

    // Try to truncate at a hyphen boundary
    let truncated = &trimmed[..MAX_LENGTH];
    if let Some(last_hyphen) = truncated.rfind('-')
        && last_hyphen > MAX_LENGTH / 2
    {
        // Only use hyphen boundary if it's not too early
        return truncated[..last_hyphen].to_string();
    }

    // Otherwise just truncate and trim trailing hyphens
    truncated.trim_end_matches('-').to_string()
}

/// Checks whether a user-supplied slug is acceptable as-is.
///
/// Accepts ASCII letters, digits, hyphens, and underscores, up to 50
/// characters. Derived slugs always satisfy this; supplied ones are
/// rejected with a form error when they do not.
///
/// # Examples
///
/// ```
/// use jot::infra::is_valid_slug;
///
/// assert!(is_valid_slug("new_slug"));
/// assert!(!is_valid_slug("with spaces"));
/// ```
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_LENGTH {
        return false;
    }
    // Same character class a slug form field accepts
    let slug_re = Regex::new(r"^[-A-Za-z0-9_]+$").unwrap();
    slug_re.is_match(slug)
}
