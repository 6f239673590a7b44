//! # Colophon
//!
//! Composable search filters and ISBN validation for library catalogs.
//!
//! ## Philosophy
//!
//! The core is pure and the storage is pluggable: a search request's optional
//! criteria are folded into a single composite predicate over book records,
//! and a storage collaborator decides how to evaluate it - directly in memory
//! here, or translated into a native query by a real backend. Absent or
//! malformed criteria never fail; they degrade to "do not filter on this
//! dimension", so a search endpoint never rejects a typo'd filter value.
//!
//! ## Quick Example
//!
//! ```rust
//! use colophon::book::{Book, StatusType};
//! use colophon::catalog::Catalog;
//! use colophon::search::PageRequest;
//! use colophon::SearchCriteria;
//!
//! let mut catalog = Catalog::in_memory();
//! catalog
//!     .add(Book::new("Landscapes of Identity", "ISBN 978-9949-687-32-9", StatusType::Have)
//!         .with_publisher("Art Museum of Estonia")
//!         .with_publish_year(2021))
//!     .expect("valid ISBN");
//!
//! // A mistyped ISBN is a client input error, not a crash
//! let rejected = catalog.add(Book::new("Typo", "IBSN 978-0-596-52068-7", StatusType::Have));
//! assert!(rejected.is_err());
//!
//! // Criteria are independently optional; absent fields filter nothing
//! let criteria = SearchCriteria::builder()
//!     .publisher("art museum*")
//!     .min_year(2000)
//!     .build();
//! let page = catalog.search(&criteria, PageRequest::of_size(20));
//! assert_eq!(page.total(), 1);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod book;
pub mod catalog;
pub mod criteria;
pub mod isbn;
pub mod predicate;
pub mod search;
pub mod text;

// Re-exports
pub use book::{Book, CoverType, StatusType};
pub use catalog::{Catalog, EntityName, ValidationError};
pub use criteria::{SearchCriteria, SearchCriteriaBuilder};
pub use isbn::IsbnError;
pub use predicate::{CompositeFilter, Predicate, PredicateExt};
pub use search::{BookStore, InMemoryStore, Page, PageRequest};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::book::{Book, CoverType, StatusType};
    pub use crate::catalog::{Catalog, EntityName, ValidationError};
    pub use crate::criteria::SearchCriteria;
    pub use crate::isbn::IsbnError;
    pub use crate::predicate::{CompositeFilter, Predicate, PredicateExt};
    pub use crate::search::{build, BookStore, InMemoryStore, Page, PageRequest};
}
