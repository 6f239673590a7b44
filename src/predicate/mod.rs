//! Predicate combinators for composable search filters
//!
//! A filter over book records is a pure function of a record to a boolean.
//! This module provides the `Predicate` trait, the per-field filter kinds the
//! catalog search is made of, and the combinators that compose them.
//!
//! # Philosophy
//!
//! Each criterion field builds its own small predicate, independently of the
//! others; the search layer ANDs them into one [`CompositeFilter`]. A field
//! with absent or unusable input contributes nothing (equivalently, the
//! always-true [`Ignore`]), so a missing criterion can never exclude results.
//!
//! # Example
//!
//! ```rust
//! use colophon::predicate::*;
//!
//! struct Record { year: Option<i32> }
//!
//! let mut filter = CompositeFilter::new();
//! filter.push(NumericRange::new(Some(2000), None, |r: &Record| r.year));
//! assert!(filter.check(&Record { year: Some(2013) }));
//! assert!(!filter.check(&Record { year: Some(1999) }));
//! ```

mod combinators;
mod exact;
mod membership;
mod numeric;
mod string_like;

// Re-export core trait and combinators
pub use combinators::{ignore, And, CompositeFilter, Ignore, Predicate, PredicateExt};

// Re-export per-field filter kinds
pub use exact::Exact;
pub use membership::ContainsAll;
pub use numeric::NumericRange;
pub use string_like::StringLike;
