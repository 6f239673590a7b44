//! Catalog service facade
//!
//! The thin layer the HTTP boundary calls into: it validates a book's ISBN
//! before the record is accepted, and runs criteria searches through a
//! [`BookStore`]. Validation failures surface as a [`ValidationError`]
//! tagged with the subject entity, ready for the caller's error envelope.

use std::error::Error as StdError;
use std::fmt;

use crate::book::Book;
use crate::criteria::SearchCriteria;
use crate::isbn;
use crate::search::{self, BookStore, InMemoryStore, Page, PageRequest};

/// Entities a validation failure can be attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityName {
    /// A book record.
    Book,
    /// An author record.
    Author,
    /// A keyword record.
    Keyword,
    /// A language record.
    Language,
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityName::Book => "BOOK",
            EntityName::Author => "AUTHOR",
            EntityName::Keyword => "KEYWORD",
            EntityName::Language => "LANGUAGE",
        };
        write!(f, "{name}")
    }
}

/// A client input error: the named entity failed validation for the given
/// human-readable reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    entity: EntityName,
    reason: String,
}

impl ValidationError {
    /// Tag a failure reason with its subject entity.
    pub fn new(entity: EntityName, reason: impl Into<String>) -> Self {
        ValidationError {
            entity,
            reason: reason.into(),
        }
    }

    /// The entity the failure is attributed to.
    pub fn entity(&self) -> EntityName {
        self.entity
    }

    /// The human-readable failure reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entity [{}] has this validation failure [{}]",
            self.entity, self.reason
        )
    }
}

impl StdError for ValidationError {}

/// Catalog operations over a pluggable storage collaborator.
///
/// # Example
///
/// ```rust
/// use colophon::book::{Book, StatusType};
/// use colophon::catalog::Catalog;
/// use colophon::search::PageRequest;
/// use colophon::SearchCriteria;
///
/// let mut catalog = Catalog::in_memory();
/// catalog
///     .add(Book::new("Landscapes of Identity", "ISBN 978-9949-687-32-9", StatusType::Have)
///         .with_publisher("Art Museum of Estonia"))
///     .unwrap();
///
/// let criteria = SearchCriteria::builder().publisher("Art Museum of Estonia").build();
/// let page = catalog.search(&criteria, PageRequest::of_size(20));
/// assert_eq!(page.total(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Catalog<S> {
    store: S,
}

impl<S: BookStore> Catalog<S> {
    /// Wrap an existing storage collaborator.
    pub fn new(store: S) -> Self {
        Catalog { store }
    }

    /// Build the composite filter for the criteria and run it through the
    /// store, returning one page of matches.
    pub fn search(&self, criteria: &SearchCriteria, request: PageRequest) -> Page<Book> {
        let filter = search::build(criteria);
        self.store.search(&filter, request)
    }

    /// Validate the ISBN a book carries, without storing anything.
    pub fn check_isbn(book: &Book) -> Result<(), ValidationError> {
        isbn::validate(&book.isbn)
            .map_err(|error| ValidationError::new(EntityName::Book, error.to_string()))
    }
}

impl Catalog<InMemoryStore> {
    /// Create a catalog over an empty in-memory store.
    pub fn in_memory() -> Self {
        Catalog::new(InMemoryStore::new())
    }

    /// Validate and store a record; rejected records are not stored.
    pub fn add(&mut self, book: Book) -> Result<(), ValidationError> {
        Self::check_isbn(&book)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %book.name, "book admitted to catalog");
        self.store.add(book);
        Ok(())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::StatusType;

    #[test]
    fn test_add_accepts_valid_isbn() {
        let mut catalog = Catalog::in_memory();
        let book = Book::new("Landscapes of Identity", "ISBN 978-9949-687-32-9", StatusType::Have);
        assert!(catalog.add(book).is_ok());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_rejects_malformed_isbn() {
        let mut catalog = Catalog::in_memory();
        let book = Book::new("Typo", "IBSN 978-0-596-52068-7", StatusType::Have);
        let error = catalog.add(book).unwrap_err();
        assert_eq!(error.entity(), EntityName::Book);
        assert_eq!(error.reason(), "Invalid ISBN");
        assert_eq!(
            error.to_string(),
            "Entity [BOOK] has this validation failure [Invalid ISBN]"
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_rejects_wrong_check_digit() {
        let mut catalog = Catalog::in_memory();
        let book = Book::new("Off by one", "ISBN 978-0-596-52068-8", StatusType::Have);
        let error = catalog.add(book).unwrap_err();
        assert_eq!(error.reason(), "Invalid ISBN check digit");
    }

    #[test]
    fn test_search_delegates_to_store() {
        let mut catalog = Catalog::in_memory();
        catalog
            .add(
                Book::new("Landscapes of Identity", "ISBN 978-9949-687-32-9", StatusType::Have)
                    .with_publisher("Art Museum of Estonia"),
            )
            .unwrap();
        catalog
            .add(
                Book::new("150 Houses", "ISBN 978-940-14620-4-4", StatusType::Have)
                    .with_publisher("Lannoo"),
            )
            .unwrap();

        let criteria = SearchCriteria::builder().publisher("Lannoo").build();
        let page = catalog.search(&criteria, PageRequest::of_size(20));
        assert_eq!(page.total(), 1);
        assert_eq!(page.items()[0].name, "150 Houses");
    }
}
