//! Faceted book search
//!
//! Composes the per-field predicates into one filter ([`build`]) and defines
//! the seam the filter is evaluated through ([`BookStore`]), together with
//! the paging types. The storage collaborator decides how to run the
//! predicate - the in-memory store evaluates it directly, a relational
//! backend would translate it into its native query mechanism.

mod filter;
mod store;

pub use filter::build;
pub use store::{BookStore, InMemoryStore, Page, PageRequest};
