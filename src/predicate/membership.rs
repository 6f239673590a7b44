//! Conjunctive collection-membership predicate

use std::collections::HashSet;
use std::fmt;

use super::combinators::Predicate;

/// Predicate requiring a record's linked-name set to contain **every**
/// requested name.
///
/// The conjunction is deliberate: a search for authors `{A, B}` returns only
/// books linked to both A and B, not books linked to either. Matching is
/// exact and case-sensitive, names compared as stored. An empty request set
/// is trivially satisfied (callers normally skip building the filter then).
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use colophon::predicate::{ContainsAll, Predicate};
///
/// struct Record { authors: HashSet<String> }
///
/// let record = Record {
///     authors: ["A", "B", "C"].iter().map(|s| s.to_string()).collect(),
/// };
///
/// let both = ContainsAll::new(["A", "B"], |r: &Record| &r.authors);
/// assert!(both.check(&record));
///
/// let missing = ContainsAll::new(["A", "D"], |r: &Record| &r.authors);
/// assert!(!missing.check(&record));
/// ```
pub struct ContainsAll<T> {
    names: HashSet<String>,
    field: fn(&T) -> &HashSet<String>,
}

impl<T> ContainsAll<T> {
    /// Build from the requested names and a field accessor.
    pub fn new<I, S>(names: I, field: fn(&T) -> &HashSet<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContainsAll {
            names: names.into_iter().map(Into::into).collect(),
            field,
        }
    }
}

impl<T> Predicate<T> for ContainsAll<T> {
    fn check(&self, value: &T) -> bool {
        let linked = (self.field)(value);
        self.names.iter().all(|name| linked.contains(name))
    }
}

impl<T> Clone for ContainsAll<T> {
    fn clone(&self) -> Self {
        ContainsAll {
            names: self.names.clone(),
            field: self.field,
        }
    }
}

impl<T> fmt::Debug for ContainsAll<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainsAll")
            .field("names", &self.names)
            .finish()
    }
}
