//! The book record and its enumerated fields
//!
//! A [`Book`] is the record type that search filters are evaluated against.
//! Only `name` and `isbn` are mandatory; everything else is optional, which is
//! why the predicates in [`crate::predicate`] all read their field through an
//! accessor returning `Option`.

use std::collections::HashSet;

/// Cover binding of a book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoverType {
    /// Rigid board binding.
    Hardcover,
    /// Flexible paper binding.
    Softcover,
    /// Flexible binding with a removable dust jacket.
    SoftcoverWithDustJacket,
}

/// Ownership status of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusType {
    /// The book is in the collection.
    Have,
    /// The book is wanted but not yet acquired.
    Wishlist,
    /// The book is currently lent out.
    Lent,
}

/// A single catalog record.
///
/// Construction starts from the two mandatory fields and chains the rest:
///
/// ```rust
/// use colophon::book::{Book, CoverType, StatusType};
///
/// let book = Book::new("Landscapes of Identity", "ISBN 978-9949-687-32-9", StatusType::Have)
///     .with_publisher("Art Museum of Estonia")
///     .with_cover(CoverType::SoftcoverWithDustJacket)
///     .with_publish_year(2021)
///     .with_authors(["Linda Kalijundi", "Kadi Polli"]);
///
/// assert_eq!(book.publisher.as_deref(), Some("Art Museum of Estonia"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    /// Short display name.
    pub name: String,
    /// Full title as printed on the title page.
    pub full_title: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Raw ISBN string, possibly with an `ISBN`/`ISBN-13` label.
    pub isbn: String,
    /// EAN barcode digits.
    pub barcode: Option<String>,
    /// Publisher name.
    pub publisher: Option<String>,
    /// Cover binding.
    pub cover: Option<CoverType>,
    /// Year of publication.
    pub publish_year: Option<i32>,
    /// Page count.
    pub pages: Option<i32>,
    /// Ownership status.
    pub status: StatusType,
    /// Names of linked authors.
    pub authors: HashSet<String>,
    /// Names of linked keywords.
    pub keywords: HashSet<String>,
    /// Names of linked languages.
    pub languages: HashSet<String>,
}

impl Book {
    /// Create a record with the mandatory fields; everything else starts empty.
    pub fn new(name: impl Into<String>, isbn: impl Into<String>, status: StatusType) -> Self {
        Book {
            name: name.into(),
            full_title: None,
            description: None,
            isbn: isbn.into(),
            barcode: None,
            publisher: None,
            cover: None,
            publish_year: None,
            pages: None,
            status,
            authors: HashSet::new(),
            keywords: HashSet::new(),
            languages: HashSet::new(),
        }
    }

    /// Set the full title.
    pub fn with_full_title(mut self, full_title: impl Into<String>) -> Self {
        self.full_title = Some(full_title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the barcode.
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Set the publisher.
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Set the cover binding.
    pub fn with_cover(mut self, cover: CoverType) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Set the publication year.
    pub fn with_publish_year(mut self, year: i32) -> Self {
        self.publish_year = Some(year);
        self
    }

    /// Set the page count.
    pub fn with_pages(mut self, pages: i32) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Replace the linked author names.
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the linked keyword names.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the linked language names.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_empty() {
        let book = Book::new("Lorem", "9780596520687", StatusType::Have);
        assert_eq!(book.name, "Lorem");
        assert_eq!(book.full_title, None);
        assert!(book.authors.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let book = Book::new("Lorem", "9780596520687", StatusType::Have)
            .with_publisher("Lannoo")
            .with_cover(CoverType::Hardcover)
            .with_publish_year(2021)
            .with_pages(253)
            .with_languages(["English"]);
        assert_eq!(book.publisher.as_deref(), Some("Lannoo"));
        assert_eq!(book.cover, Some(CoverType::Hardcover));
        assert_eq!(book.publish_year, Some(2021));
        assert!(book.languages.contains("English"));
    }
}
