//! Case-insensitive string-field predicate
//!
//! The text criteria (`name`, `full_title`, `description`, `isbn`, `barcode`,
//! `publisher`) all filter through this predicate: case-insensitive equality,
//! or a `%`-pattern match when the normalized value carries a match token.

use std::fmt;

use super::combinators::Predicate;
use crate::text::{like_match, normalize_pattern, MATCH_TOKEN};

/// Predicate matching a string field case-insensitively, with optional
/// wildcard patterns.
///
/// The raw value is normalized once at construction: lowercased, `*`
/// translated to `%`. At check time the selected field is lowercased and
/// either compared for equality or matched against the pattern. A record
/// whose field is absent never matches.
///
/// # Example
///
/// ```rust
/// use colophon::predicate::{Predicate, StringLike};
///
/// struct Record { publisher: Option<String> }
///
/// let p = StringLike::new("lannoo", |r: &Record| r.publisher.as_deref());
/// assert!(p.check(&Record { publisher: Some("Lannoo".into()) }));
/// assert!(!p.check(&Record { publisher: None }));
///
/// let p = StringLike::new("*Museum*", |r: &Record| r.publisher.as_deref());
/// assert!(p.check(&Record { publisher: Some("Art Museum of Estonia".into()) }));
/// ```
pub struct StringLike<T> {
    pattern: String,
    field: fn(&T) -> Option<&str>,
}

impl<T> StringLike<T> {
    /// Build from a raw criterion value and a field accessor.
    ///
    /// The caller is expected to have run the value through the wildcard
    /// validity guard first; see [`crate::text::is_blank_or_wrong_wildcard`].
    pub fn new(raw: &str, field: fn(&T) -> Option<&str>) -> Self {
        StringLike {
            pattern: normalize_pattern(raw),
            field,
        }
    }
}

impl<T> Predicate<T> for StringLike<T> {
    fn check(&self, value: &T) -> bool {
        match (self.field)(value) {
            Some(text) => {
                let text = text.to_lowercase();
                if self.pattern.contains(MATCH_TOKEN) {
                    like_match(&self.pattern, &text)
                } else {
                    self.pattern == text
                }
            }
            None => false,
        }
    }
}

impl<T> Clone for StringLike<T> {
    fn clone(&self) -> Self {
        StringLike {
            pattern: self.pattern.clone(),
            field: self.field,
        }
    }
}

impl<T> fmt::Debug for StringLike<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringLike")
            .field("pattern", &self.pattern)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        name: Option<String>,
    }

    fn record(name: &str) -> Record {
        Record {
            name: Some(name.to_string()),
        }
    }

    fn name(record: &Record) -> Option<&str> {
        record.name.as_deref()
    }

    #[test]
    fn test_equality_is_case_insensitive() {
        let p = StringLike::new("LANNOO", name);
        assert!(p.check(&record("lannoo")));
        assert!(p.check(&record("Lannoo")));
        assert!(!p.check(&record("Lannoo Press")));
    }

    #[test]
    fn test_prefix_pattern() {
        let p = StringLike::new("Land*", name);
        assert!(p.check(&record("Landscapes of Identity")));
        assert!(!p.check(&record("Highlands")));
    }

    #[test]
    fn test_suffix_pattern() {
        let p = StringLike::new("*Identity", name);
        assert!(p.check(&record("Landscapes of Identity")));
        assert!(!p.check(&record("Identity Crisis")));
    }

    #[test]
    fn test_contains_pattern() {
        let p = StringLike::new("*Estonia*", name);
        assert!(p.check(&record("Art Museum of Estonia")));
        assert!(p.check(&record("estonian museum of architecture")));
        assert!(!p.check(&record("Lannoo")));
    }

    #[test]
    fn test_absent_field_never_matches() {
        let p = StringLike::new("*Estonia*", name);
        assert!(!p.check(&Record { name: None }));
    }

    #[test]
    fn test_literal_match_token_behaves_like_wildcard() {
        // a raw % is handed to the storage layer untouched, same as the original
        let p = StringLike::new("%Estonia%", name);
        assert!(p.check(&record("Art Museum of Estonia")));
    }
}
