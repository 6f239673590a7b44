//! Builds one composite filter from a criteria value
//!
//! This is the combinator the search endpoint funnels into: every field of
//! the criteria is translated independently into a sub-predicate, and the
//! sub-predicates are AND-ed into a [`CompositeFilter`]. Malformed or blank
//! input never raises an error; the field is simply not filtered on.

use std::collections::HashSet;

use crate::book::Book;
use crate::criteria::SearchCriteria;
use crate::predicate::{CompositeFilter, ContainsAll, Exact, NumericRange, StringLike};
use crate::text::is_blank_or_wrong_wildcard;

/// Build the composite predicate for one search request.
///
/// Pure function of its input: equal criteria values yield filters that
/// accept and reject the same records, so callers may cache the result. An
/// all-absent criteria value yields the always-true composite.
///
/// # Example
///
/// ```rust
/// use colophon::book::{Book, StatusType};
/// use colophon::predicate::Predicate;
/// use colophon::{search, SearchCriteria};
///
/// let book = Book::new("Landscapes of Identity", "ISBN 978-9949-687-32-9", StatusType::Have)
///     .with_publisher("Art Museum of Estonia");
///
/// let criteria = SearchCriteria::builder().publisher("art museum*").build();
/// assert!(search::build(&criteria).check(&book));
///
/// let criteria = SearchCriteria::builder().publisher("Lannoo").build();
/// assert!(!search::build(&criteria).check(&book));
/// ```
pub fn build(criteria: &SearchCriteria) -> CompositeFilter<Book> {
    let mut filter = CompositeFilter::new();

    push_text(&mut filter, criteria.name(), |b| Some(b.name.as_str()));
    push_text(&mut filter, criteria.full_title(), |b| b.full_title.as_deref());
    push_text(&mut filter, criteria.description(), |b| b.description.as_deref());
    push_text(&mut filter, criteria.isbn(), |b| Some(b.isbn.as_str()));
    push_text(&mut filter, criteria.barcode(), |b| b.barcode.as_deref());
    push_text(&mut filter, criteria.publisher(), |b| b.publisher.as_deref());

    if let Some(cover) = criteria.cover_type() {
        filter.push(Exact::new(cover, |b: &Book| b.cover));
    }

    push_range(&mut filter, criteria.min_year(), criteria.max_year(), |b| {
        b.publish_year
    });
    push_range(&mut filter, criteria.min_pages(), criteria.max_pages(), |b| {
        b.pages
    });

    push_names(&mut filter, criteria.authors(), |b| &b.authors);
    push_names(&mut filter, criteria.keywords(), |b| &b.keywords);
    push_names(&mut filter, criteria.languages(), |b| &b.languages);

    #[cfg(feature = "tracing")]
    tracing::debug!(clauses = filter.len(), "built composite book filter");

    filter
}

fn push_text(
    filter: &mut CompositeFilter<Book>,
    raw: Option<&str>,
    field: fn(&Book) -> Option<&str>,
) {
    if let Some(value) = raw {
        if !is_blank_or_wrong_wildcard(value) {
            filter.push(StringLike::new(value, field));
        }
    }
}

fn push_range(
    filter: &mut CompositeFilter<Book>,
    min: Option<i32>,
    max: Option<i32>,
    field: fn(&Book) -> Option<i32>,
) {
    if min.is_some() || max.is_some() {
        filter.push(NumericRange::new(min, max, field));
    }
}

fn push_names(
    filter: &mut CompositeFilter<Book>,
    names: Option<&HashSet<String>>,
    field: fn(&Book) -> &HashSet<String>,
) {
    if let Some(names) = names {
        if !names.is_empty() {
            filter.push(ContainsAll::new(names.iter().cloned(), field));
        }
    }
}
