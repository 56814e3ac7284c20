//! The book catalog
//!
//! The catalog is fixed at build time and never changes while the
//! application runs. Favorites keep their own copies of book records, so
//! nothing outside this module depends on catalog entries staying put.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A single book record
///
/// This is also the element type of the persisted favorites payload, so
/// the field names are part of the on-disk format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub category: String,
}

impl Book {
    pub fn new(id: u32, title: &str, author: &str, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        }
    }
}

static CATALOG: LazyLock<Vec<Book>> = LazyLock::new(|| {
    vec![
        Book::new(1, "Simyacı", "Paulo Coelho", "Roman"),
        Book::new(2, "Körlük", "José Saramago", "Roman"),
        Book::new(3, "Hayvan Çiftliği", "George Orwell", "Siyaset"),
        Book::new(4, "Nutuk", "Mustafa Kemal Atatürk", "Tarih"),
        Book::new(5, "Küçük Prens", "Antoine de Saint-Exupéry", "Çocuk"),
        Book::new(6, "1984", "George Orwell", "Distopya"),
        Book::new(7, "Don Kişot", "Miguel de Cervantes", "Klasik"),
        Book::new(8, "Dönüşüm", "Franz Kafka", "Modern Klasik"),
    ]
});

/// The process-wide catalog, in display order
pub fn catalog() -> &'static [Book] {
    &CATALOG
}

/// Distinct categories of `books` in order of first appearance
pub fn distinct_categories(books: &[Book]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for book in books {
        if !categories.iter().any(|c| *c == book.category) {
            categories.push(book.category.clone());
        }
    }
    categories
}
