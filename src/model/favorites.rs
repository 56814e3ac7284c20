//! Favorite books
//!
//! Favorites hold full book records, copied at the moment they were
//! favorited, in the order they were added. A later catalog change does not
//! touch entries already stored here.

use crate::catalog::Book;

/// Ordered set of favorite books, unique by id
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    books: Vec<Book>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list that may repeat ids; the first occurrence wins.
    pub fn from_books(books: Vec<Book>) -> Self {
        let mut set = Self::new();
        for book in books {
            set.add(book);
        }
        set
    }

    /// Decode the persisted JSON payload.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        let books: Vec<Book> = serde_json::from_str(payload)?;
        Ok(Self::from_books(books))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.books)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.books.iter().any(|b| b.id == id)
    }

    /// Append `book` unless a favorite with its id already exists.
    /// Returns whether the set changed.
    pub fn add(&mut self, book: Book) -> bool {
        if self.contains(book.id) {
            return false;
        }
        self.books.push(book);
        true
    }

    /// Returns the removed record, if any.
    pub fn remove(&mut self, id: u32) -> Option<Book> {
        let index = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(index))
    }

    /// Remove the book if present, append it otherwise.
    /// Returns `true` when the book is a favorite afterwards.
    pub fn toggle(&mut self, book: &Book) -> bool {
        if self.remove(book.id).is_some() {
            false
        } else {
            self.add(book.clone())
        }
    }

    pub fn clear(&mut self) {
        self.books.clear();
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
