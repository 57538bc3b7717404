//! Species reference lookup policy.
//!
//! The catalog query itself lives in `stockboard-db`; this module owns the
//! bounds and query normalization so the short-circuit rule ("queries under
//! two characters never touch the catalog") is identical everywhere.

/// Minimum trimmed query length before the catalog is consulted.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of suggestions returned to the caller.
pub const SEARCH_LIMIT: i64 = 10;

/// Normalize a raw query string for catalog search.
///
/// Returns `None` for queries shorter than [`MIN_QUERY_LEN`] after trimming;
/// callers skip the database entirely and return no suggestions.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return None;
    }
    Some(trimmed.to_string())
}

/// Escape a normalized query for use inside an `ILIKE '%...%'` pattern.
///
/// `%`, `_`, and `\` are literal characters in a species name search, never
/// wildcards supplied by the buyer.
pub fn ilike_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_are_rejected() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("c"), None);
        assert_eq!(normalize_query("  c  "), None);
    }

    #[test]
    fn two_characters_is_enough() {
        assert_eq!(normalize_query("cl"), Some("cl".to_string()));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize_query("  clown  "), Some("clown".to_string()));
    }

    #[test]
    fn pattern_wraps_in_wildcards() {
        assert_eq!(ilike_pattern("clow"), "%clow%");
    }

    #[test]
    fn pattern_escapes_like_metacharacters() {
        assert_eq!(ilike_pattern("100%"), "%100\\%%");
        assert_eq!(ilike_pattern("a_b"), "%a\\_b%");
        assert_eq!(ilike_pattern("a\\b"), "%a\\\\b%");
    }
}
