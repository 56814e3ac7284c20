//! Terminal browser for the book club catalog
//!
//! The catalog is filtered by title search text and category, and books can
//! be collected into a favorites list. Search text, category and favorites
//! survive restarts through a key-value store.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod view;
