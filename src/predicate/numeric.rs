//! Inclusive numeric-range predicate

use std::fmt;

use super::combinators::Predicate;

/// Predicate holding inclusive bounds over an integer field.
///
/// One absent bound makes the check one-sided; both absent makes it trivially
/// true (callers normally skip building the filter in that case). No check is
/// made that `min <= max`; an inverted range simply matches nothing. A record
/// whose field is absent does not satisfy an active bound.
///
/// # Example
///
/// ```rust
/// use colophon::predicate::{NumericRange, Predicate};
///
/// struct Record { publish_year: Option<i32> }
///
/// let p = NumericRange::new(Some(2000), Some(2023), |r: &Record| r.publish_year);
/// assert!(p.check(&Record { publish_year: Some(2021) }));
/// assert!(!p.check(&Record { publish_year: Some(1999) }));
/// assert!(!p.check(&Record { publish_year: None }));
/// ```
pub struct NumericRange<T> {
    min: Option<i32>,
    max: Option<i32>,
    field: fn(&T) -> Option<i32>,
}

impl<T> NumericRange<T> {
    /// Build from optional inclusive bounds and a field accessor.
    pub fn new(min: Option<i32>, max: Option<i32>, field: fn(&T) -> Option<i32>) -> Self {
        NumericRange { min, max, field }
    }
}

impl<T> Predicate<T> for NumericRange<T> {
    fn check(&self, value: &T) -> bool {
        if self.min.is_none() && self.max.is_none() {
            return true;
        }
        match (self.field)(value) {
            Some(v) => {
                self.min.map_or(true, |min| v >= min) && self.max.map_or(true, |max| v <= max)
            }
            None => false,
        }
    }
}

impl<T> Clone for NumericRange<T> {
    fn clone(&self) -> Self {
        NumericRange {
            min: self.min,
            max: self.max,
            field: self.field,
        }
    }
}

impl<T> fmt::Debug for NumericRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericRange")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}
