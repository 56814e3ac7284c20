//! Catalog filtering by search text and category

use std::fmt;

use crate::catalog::Book;

/// Category criterion: every category, or exactly one by name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Label of the "every category" choice, also its persisted form
    pub const ALL_LABEL: &'static str = "All";

    /// Parse a persisted value.
    ///
    /// Names are taken verbatim, even when no catalog book carries them.
    /// An empty value counts as nothing stored.
    pub fn from_stored(raw: &str) -> Self {
        if raw.is_empty() || raw == Self::ALL_LABEL {
            Self::All
        } else {
            Self::Named(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Named(name) => name,
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => book.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The selector choices: `All` followed by the catalog's categories
pub fn category_choices(catalog: &[Book]) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(
            crate::catalog::distinct_categories(catalog)
                .into_iter()
                .map(CategoryFilter::Named),
        )
        .collect()
}

/// Books matching both criteria, in catalog order.
///
/// The search text is trimmed and compared case-insensitively against the
/// title; an empty search text matches every title.
pub fn filter_books<'a>(
    catalog: &'a [Book],
    search_text: &str,
    category: &CategoryFilter,
) -> Vec<&'a Book> {
    let needle = search_text.trim().to_lowercase();
    catalog
        .iter()
        .filter(|book| category.matches(book) && book.title.to_lowercase().contains(&needle))
        .collect()
}
