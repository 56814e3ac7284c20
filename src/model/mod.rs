//! Model module - Application state and data types
//!
//! - `types`: UI state (focus, selections, overlays)
//! - `filter`: category criterion and catalog filtering
//! - `favorites`: ordered favorite set
//! - `app_model`: state owner with write-through persistence

mod types;
mod filter;
mod favorites;
mod app_model;

pub use types::{ActiveSection, UiState};

pub use filter::{category_choices, filter_books, CategoryFilter};

pub use favorites::FavoriteSet;

pub use app_model::{AppModel, NOTICE_TTL};
