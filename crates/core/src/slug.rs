//! Storefront slug generation and validation.
//!
//! A slug is the seller's public board path (`/{slug}`). It is chosen once
//! at onboarding; the API never updates it afterwards, so changing it is a
//! support-mediated process rather than a self-service edit.

/// Maximum slug length.
pub const MAX_SLUG_LEN: usize = 60;

/// Derive a slug from a business name: lowercase, alphanumeric runs joined
/// by single dashes, truncated to [`MAX_SLUG_LEN`].
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }
    slug
}

/// Whether a caller-supplied slug is acceptable: non-empty, bounded, only
/// lowercase alphanumerics and dashes, no leading/trailing/double dash.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Reef Haven Aquatics"), "reef-haven-aquatics");
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Joe's  Fish & Coral!"), "joe-s-fish-coral");
    }

    #[test]
    fn slugify_drops_leading_and_trailing_separators() {
        assert_eq!(slugify("  --Tank Life--  "), "tank-life");
    }

    #[test]
    fn slugify_truncates_long_names() {
        let slug = slugify(&"a".repeat(200));
        assert!(slug.len() <= MAX_SLUG_LEN);
    }

    #[test]
    fn valid_slugs() {
        assert!(is_valid_slug("reef-haven"));
        assert!(is_valid_slug("store42"));
    }

    #[test]
    fn invalid_slugs() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("Upper"));
        assert!(!is_valid_slug("space here"));
    }
}
