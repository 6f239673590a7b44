//! String normalization for the search layer
//!
//! These are the leaf utilities the filter builder sits on: blank detection,
//! the wildcard validity guard, translation of the user-facing `*` wildcard
//! into the storage-layer `%` match token, and an in-memory matcher for the
//! resulting patterns.

/// User-facing wildcard character accepted in text criteria.
pub const WILDCARD: char = '*';

/// Storage-layer substring-match token that [`WILDCARD`] is translated into.
pub const MATCH_TOKEN: char = '%';

/// Check if a string is empty or whitespace only.
///
/// # Example
///
/// ```rust
/// use colophon::text::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   "));
/// assert!(!is_blank(" a "));
/// ```
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Check if a wildcard value is too unselective to filter on.
///
/// A value containing the wildcard is rejected when it is the bare wildcard,
/// carries more than two wildcards, or is shorter than four characters after
/// trimming. A bare `*` or `A*` would match the whole corpus; such inputs are
/// treated as "no filter" instead. Values without a wildcard always pass.
fn is_wrong_wildcard(input: &str) -> bool {
    if !input.contains(WILDCARD) {
        return false;
    }
    let wildcards = input.chars().filter(|&c| c == WILDCARD).count();
    input == "*" || wildcards > 2 || input.trim().chars().count() < 4
}

/// Check if a text criterion should be ignored: blank, or a wildcard value
/// rejected by the validity guard.
///
/// # Example
///
/// ```rust
/// use colophon::text::is_blank_or_wrong_wildcard;
///
/// assert!(is_blank_or_wrong_wildcard(""));
/// assert!(is_blank_or_wrong_wildcard("*"));
/// assert!(is_blank_or_wrong_wildcard("ZZ*"));       // shorter than 4
/// assert!(is_blank_or_wrong_wildcard("*A*B*C*"));   // more than two wildcards
/// assert!(!is_blank_or_wrong_wildcard("Art*"));
/// assert!(!is_blank_or_wrong_wildcard("abc"));      // short but no wildcard
/// ```
pub fn is_blank_or_wrong_wildcard(input: &str) -> bool {
    is_blank(input) || is_wrong_wildcard(input)
}

/// Lowercase a text criterion and translate `*` into `%`.
///
/// # Example
///
/// ```rust
/// use colophon::text::normalize_pattern;
///
/// assert_eq!(normalize_pattern("Landscapes*"), "landscapes%");
/// assert_eq!(normalize_pattern("Lannoo"), "lannoo");
/// ```
pub fn normalize_pattern(input: &str) -> String {
    input.replace(WILDCARD, "%").to_lowercase()
}

/// Match `text` against a pattern where [`MATCH_TOKEN`] stands for any run of
/// characters, anchored at both ends.
///
/// A pattern without the token is an exact comparison. The caller is expected
/// to normalize case on both sides first.
///
/// # Example
///
/// ```rust
/// use colophon::text::like_match;
///
/// assert!(like_match("landscapes%", "landscapes of identity"));
/// assert!(like_match("%identity", "landscapes of identity"));
/// assert!(like_match("%of%", "landscapes of identity"));
/// assert!(!like_match("%museum%", "landscapes of identity"));
/// ```
pub fn like_match(pattern: &str, text: &str) -> bool {
    if !pattern.contains(MATCH_TOKEN) {
        return pattern == text;
    }
    let segments: Vec<&str> = pattern.split(MATCH_TOKEN).collect();
    let last = segments.len() - 1;
    let mut rest = text;
    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        if i == 0 {
            if !rest.starts_with(segment) {
                return false;
            }
            rest = &rest[segment.len()..];
        } else if i == last {
            if !rest.ends_with(segment) {
                return false;
            }
        } else {
            match rest.find(segment) {
                Some(pos) => rest = &rest[pos + segment.len()..],
                None => return false,
            }
        }
    }
    true
}

/// Capitalize the first letter of every space-separated word and lowercase
/// the rest, the form stored names are normalized to.
///
/// # Example
///
/// ```rust
/// use colophon::text::capitalize_words;
///
/// assert_eq!(capitalize_words("art museum of estonia"), "Art Museum Of Estonia");
/// assert_eq!(capitalize_words("LANNOO"), "Lannoo");
/// ```
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t "));
        assert!(!is_blank("x"));
    }

    #[test]
    fn test_bare_wildcard_is_wrong() {
        assert!(is_blank_or_wrong_wildcard("*"));
    }

    #[test]
    fn test_more_than_two_wildcards_is_wrong() {
        assert!(is_blank_or_wrong_wildcard("*A*B*C*"));
        assert!(!is_blank_or_wrong_wildcard("*Art*"));
    }

    #[test]
    fn test_short_wildcard_is_wrong() {
        assert!(is_blank_or_wrong_wildcard("ZZ*"));
        assert!(is_blank_or_wrong_wildcard(" ZZ* ")); // trimmed before measuring
        assert!(!is_blank_or_wrong_wildcard("Art*"));
    }

    #[test]
    fn test_short_value_without_wildcard_passes() {
        assert!(!is_blank_or_wrong_wildcard("ZZ"));
    }

    #[test]
    fn test_normalize_pattern() {
        assert_eq!(normalize_pattern("*Estonia*"), "%estonia%");
        assert_eq!(normalize_pattern("Lannoo"), "lannoo");
    }

    #[test]
    fn test_like_match_exact_without_token() {
        assert!(like_match("lannoo", "lannoo"));
        assert!(!like_match("lannoo", "lannoo press"));
    }

    #[test]
    fn test_like_match_prefix_suffix_contains() {
        assert!(like_match("land%", "landscapes of identity"));
        assert!(!like_match("land%", "highlands"));
        assert!(like_match("%identity", "landscapes of identity"));
        assert!(!like_match("%identity", "identity crisis"));
        assert!(like_match("%of%", "landscapes of identity"));
    }

    #[test]
    fn test_like_match_two_tokens() {
        assert!(like_match("land%identity", "landscapes of identity"));
        assert!(!like_match("land%identity", "landscapes of art"));
        // middle segment must appear between the anchored ends
        assert!(like_match("%of%art", "history of estonian art"));
        assert!(!like_match("%of%art", "history of estonia"));
    }

    #[test]
    fn test_like_match_needs_both_occurrences() {
        // the trailing segment may not reuse the characters the middle one consumed
        assert!(!like_match("a%bc%bc", "axbc"));
        assert!(like_match("a%bc%bc", "axbcybc"));
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("kumu art museum"), "Kumu Art Museum");
        assert_eq!(capitalize_words("ESTONIAN art"), "Estonian Art");
    }
}
