//! Storage collaborator seam and paging types
//!
//! The core never talks to a database: it hands a [`CompositeFilter`] to a
//! [`BookStore`], which translates the predicate into whatever its backing
//! store understands and returns one page of matches. [`InMemoryStore`] is
//! the reference implementation: it evaluates the predicate directly over a
//! vector in insertion order, which is also what the tests run against.

use crate::book::Book;
use crate::predicate::{CompositeFilter, Predicate};

/// A request for one page of search results.
///
/// Pages are zero-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Request the given page with the given size.
    pub fn new(page: usize, size: usize) -> Self {
        PageRequest { page, size }
    }

    /// Request the first page with the given size.
    pub fn of_size(size: usize) -> Self {
        PageRequest { page: 0, size }
    }

    /// Zero-indexed page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Maximum number of records in the page.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the first record of this page in the filtered set.
    pub fn offset(&self) -> usize {
        self.page * self.size
    }
}

/// One page of results plus the total size of the filtered set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    items: Vec<T>,
    page: usize,
    size: usize,
    total: usize,
}

impl<T> Page<T> {
    /// Assemble a page from its items, the request that produced it, and the
    /// total number of filtered records.
    pub fn new(items: Vec<T>, request: PageRequest, total: usize) -> Self {
        Page {
            items,
            page: request.page(),
            size: request.size(),
            total,
        }
    }

    /// Records in this page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its records.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Zero-indexed page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Requested page size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of records matching the filter, across all pages.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages needed for the whole filtered set.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.size.max(1))
    }

    /// Number of records in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if this page carries no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A storage collaborator able to run a composite filter and page the matches.
///
/// Implementations own whatever transactional or concurrency discipline the
/// actual scan needs; the core only requires that pages over one filtered set
/// are internally consistent and exhaustive, in a stable store-defined order.
pub trait BookStore {
    /// Evaluate the filter over the collection and return the requested page.
    fn search(&self, filter: &CompositeFilter<Book>, request: PageRequest) -> Page<Book>;
}

/// In-memory store keeping records in insertion order.
///
/// # Example
///
/// ```rust
/// use colophon::book::{Book, StatusType};
/// use colophon::search::{BookStore, InMemoryStore, PageRequest};
/// use colophon::{search, SearchCriteria};
///
/// let mut store = InMemoryStore::new();
/// store.add(Book::new("Landscapes of Identity", "9789949687329", StatusType::Have));
/// store.add(Book::new("Conflicts and Adaptations", "9789949687442", StatusType::Have));
///
/// let filter = search::build(&SearchCriteria::empty());
/// let page = store.search(&filter, PageRequest::of_size(20));
/// assert_eq!(page.total(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        InMemoryStore { books: Vec::new() }
    }

    /// Append a record; insertion order is the result order.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookStore for InMemoryStore {
    fn search(&self, filter: &CompositeFilter<Book>, request: PageRequest) -> Page<Book> {
        let matched: Vec<&Book> = self.books.iter().filter(|book| filter.check(book)).collect();
        let total = matched.len();
        let items = matched
            .into_iter()
            .skip(request.offset())
            .take(request.size())
            .cloned()
            .collect();
        Page::new(items, request, total)
    }
}
