//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the pairwise
//! `And` combinator, the always-true `Ignore` predicate that absent criteria
//! degrade to, and the boxed `CompositeFilter` that a whole search request
//! collapses into.

use std::fmt;

/// A composable predicate over values of type T.
///
/// Predicates are pure and `Send + Sync`, so a built filter can be evaluated
/// from any number of request-handling threads without synchronization.
///
/// # Example
///
/// ```rust
/// use colophon::predicate::{Predicate, PredicateExt};
///
/// let in_range = (|y: &i32| *y >= 2000).and(|y: &i32| *y <= 2023);
/// assert!(in_range.check(&2021));
/// assert!(!in_range.check(&1999));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for combining predicates.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colophon::predicate::{Predicate, PredicateExt};
    ///
    /// let p = (|v: &i32| *v > 0).and(|v: &i32| *v < 100);
    /// assert!(p.check(&50));
    /// assert!(!p.check(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// The always-true predicate.
///
/// Absent or malformed criteria degrade to this instead of raising an error:
/// a missing criterion must never exclude results.
#[derive(Clone, Copy, Default, Debug)]
pub struct Ignore;

impl<T: ?Sized> Predicate<T> for Ignore {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        true
    }
}

/// Create the always-true predicate.
///
/// # Example
///
/// ```rust
/// use colophon::predicate::{ignore, Predicate};
///
/// assert!(ignore().check(&42));
/// assert!(ignore().check("anything"));
/// ```
pub fn ignore() -> Ignore {
    Ignore
}

/// The logical AND of an arbitrary number of independently-built clauses.
///
/// Built fresh per search call, stateless, discarded after use. An empty
/// composite accepts every record, which is how an all-absent criteria value
/// yields the full corpus.
///
/// # Example
///
/// ```rust
/// use colophon::predicate::{CompositeFilter, Predicate};
///
/// let mut filter = CompositeFilter::new();
/// filter.push(|v: &i32| *v >= 10);
/// filter.push(|v: &i32| *v % 2 == 0);
/// assert!(filter.check(&12));
/// assert!(!filter.check(&11));
/// ```
pub struct CompositeFilter<T> {
    clauses: Vec<Box<dyn Predicate<T>>>,
}

impl<T> CompositeFilter<T> {
    /// Create an empty composite; it accepts every record until clauses are added.
    pub fn new() -> Self {
        CompositeFilter { clauses: Vec::new() }
    }

    /// Add a clause; the composite requires every pushed clause to hold.
    pub fn push(&mut self, clause: impl Predicate<T> + 'static) {
        self.clauses.push(Box::new(clause));
    }

    /// Number of active clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// True if no clause is active, i.e. the composite accepts every record.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl<T> Default for CompositeFilter<T> {
    fn default() -> Self {
        CompositeFilter::new()
    }
}

impl<T> Predicate<T> for CompositeFilter<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.clauses.iter().all(|clause| clause.check(value))
    }
}

impl<T> fmt::Debug for CompositeFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeFilter")
            .field("clauses", &self.clauses.len())
            .finish()
    }
}
