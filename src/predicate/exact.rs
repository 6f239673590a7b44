//! Typed exact-match predicate

use std::fmt;

use super::combinators::Predicate;

/// Predicate requiring a typed field to equal a fixed value.
///
/// Used for enum criteria such as the cover type, where matching is typed and
/// case-sensitive rather than textual. A record whose field is absent never
/// matches.
///
/// # Example
///
/// ```rust
/// use colophon::book::CoverType;
/// use colophon::predicate::{Exact, Predicate};
///
/// struct Record { cover: Option<CoverType> }
///
/// let p = Exact::new(CoverType::Hardcover, |r: &Record| r.cover);
/// assert!(p.check(&Record { cover: Some(CoverType::Hardcover) }));
/// assert!(!p.check(&Record { cover: Some(CoverType::Softcover) }));
/// assert!(!p.check(&Record { cover: None }));
/// ```
pub struct Exact<T, V> {
    value: V,
    field: fn(&T) -> Option<V>,
}

impl<T, V> Exact<T, V> {
    /// Build from the required value and a field accessor.
    pub fn new(value: V, field: fn(&T) -> Option<V>) -> Self {
        Exact { value, field }
    }
}

impl<T, V> Predicate<T> for Exact<T, V>
where
    V: PartialEq + Copy + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        (self.field)(value) == Some(self.value)
    }
}

impl<T, V: Copy> Clone for Exact<T, V> {
    fn clone(&self) -> Self {
        Exact {
            value: self.value,
            field: self.field,
        }
    }
}

impl<T, V: fmt::Debug> fmt::Debug for Exact<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exact").field("value", &self.value).finish()
    }
}
