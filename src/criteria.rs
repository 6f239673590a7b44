//! Search criteria for the book catalog
//!
//! [`SearchCriteria`] is an immutable value object: every field is
//! independently optional, and an absent field means "do not filter on this
//! dimension", never "filter for empty". It is assembled through
//! [`SearchCriteriaBuilder`] and handed to [`crate::search::build`].

use std::collections::HashSet;

use crate::book::CoverType;

/// One search request's worth of optional criteria.
///
/// # Example
///
/// ```rust
/// use colophon::SearchCriteria;
///
/// let criteria = SearchCriteria::builder()
///     .publisher("Art Museum of Estonia")
///     .min_year(2000)
///     .max_year(2023)
///     .authors(["Kadi Polli"])
///     .build();
///
/// assert_eq!(criteria.publisher(), Some("Art Museum of Estonia"));
/// assert_eq!(criteria.min_year(), Some(2000));
/// assert_eq!(criteria.name(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCriteria {
    name: Option<String>,
    full_title: Option<String>,
    description: Option<String>,
    isbn: Option<String>,
    barcode: Option<String>,
    publisher: Option<String>,
    cover_type: Option<CoverType>,
    min_year: Option<i32>,
    max_year: Option<i32>,
    min_pages: Option<i32>,
    max_pages: Option<i32>,
    authors: Option<HashSet<String>>,
    keywords: Option<HashSet<String>>,
    languages: Option<HashSet<String>>,
}

impl SearchCriteria {
    /// Start building a criteria value.
    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::default()
    }

    /// Criteria with every field absent; matches every record.
    pub fn empty() -> Self {
        SearchCriteria::default()
    }

    /// Name criterion.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Full-title criterion.
    pub fn full_title(&self) -> Option<&str> {
        self.full_title.as_deref()
    }

    /// Description criterion.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// ISBN criterion.
    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    /// Barcode criterion.
    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref()
    }

    /// Publisher criterion.
    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    /// Cover-type criterion.
    pub fn cover_type(&self) -> Option<CoverType> {
        self.cover_type
    }

    /// Lower publication-year bound, inclusive.
    pub fn min_year(&self) -> Option<i32> {
        self.min_year
    }

    /// Upper publication-year bound, inclusive.
    pub fn max_year(&self) -> Option<i32> {
        self.max_year
    }

    /// Lower page-count bound, inclusive.
    pub fn min_pages(&self) -> Option<i32> {
        self.min_pages
    }

    /// Upper page-count bound, inclusive.
    pub fn max_pages(&self) -> Option<i32> {
        self.max_pages
    }

    /// Requested author names; the book must be linked to every one.
    pub fn authors(&self) -> Option<&HashSet<String>> {
        self.authors.as_ref()
    }

    /// Requested keyword names; the book must be linked to every one.
    pub fn keywords(&self) -> Option<&HashSet<String>> {
        self.keywords.as_ref()
    }

    /// Requested language names; the book must be linked to every one.
    pub fn languages(&self) -> Option<&HashSet<String>> {
        self.languages.as_ref()
    }
}

/// Builder for [`SearchCriteria`]. Every setter is optional.
#[derive(Clone, Debug, Default)]
pub struct SearchCriteriaBuilder {
    criteria: SearchCriteria,
}

impl SearchCriteriaBuilder {
    /// Filter on the short name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.criteria.name = Some(name.into());
        self
    }

    /// Filter on the full title.
    pub fn full_title(mut self, full_title: impl Into<String>) -> Self {
        self.criteria.full_title = Some(full_title.into());
        self
    }

    /// Filter on the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.criteria.description = Some(description.into());
        self
    }

    /// Filter on the raw ISBN string.
    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.criteria.isbn = Some(isbn.into());
        self
    }

    /// Filter on the barcode.
    pub fn barcode(mut self, barcode: impl Into<String>) -> Self {
        self.criteria.barcode = Some(barcode.into());
        self
    }

    /// Filter on the publisher.
    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.criteria.publisher = Some(publisher.into());
        self
    }

    /// Filter on the cover binding.
    pub fn cover_type(mut self, cover_type: CoverType) -> Self {
        self.criteria.cover_type = Some(cover_type);
        self
    }

    /// Require `publish_year >= min_year`.
    pub fn min_year(mut self, min_year: i32) -> Self {
        self.criteria.min_year = Some(min_year);
        self
    }

    /// Require `publish_year <= max_year`.
    pub fn max_year(mut self, max_year: i32) -> Self {
        self.criteria.max_year = Some(max_year);
        self
    }

    /// Require `pages >= min_pages`.
    pub fn min_pages(mut self, min_pages: i32) -> Self {
        self.criteria.min_pages = Some(min_pages);
        self
    }

    /// Require `pages <= max_pages`.
    pub fn max_pages(mut self, max_pages: i32) -> Self {
        self.criteria.max_pages = Some(max_pages);
        self
    }

    /// Require the book to be linked to every given author.
    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    /// Require the book to be linked to every given keyword.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Require the book to be linked to every given language.
    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    /// Finish and return the immutable criteria value.
    pub fn build(self) -> SearchCriteria {
        self.criteria
    }
}
