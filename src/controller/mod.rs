//! Controller module - turning user input into state changes
//!
//! - `input`: key event handling
//!
//! Key handling resolves to either UI navigation or one of the [`Intent`]s,
//! which are applied through [`AppController::dispatch`].

mod input;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::catalog::Book;
use crate::model::{AppModel, CategoryFilter};

/// A user action that changes persisted state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    SearchTextChanged(String),
    CategoryChanged(CategoryFilter),
    FavoriteToggled(Book),
    FavoritesCleared,
}

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }

    pub async fn dispatch(&self, intent: Intent) {
        let mut model = self.model.lock().await;
        Self::apply(&mut model, intent);
    }

    pub(crate) fn apply(model: &mut AppModel, intent: Intent) {
        tracing::debug!(?intent, "Dispatching intent");
        match intent {
            Intent::SearchTextChanged(text) => model.set_search_text(text),
            Intent::CategoryChanged(category) => model.set_category(category),
            Intent::FavoriteToggled(book) => {
                let message = if model.toggle_favorite(&book) {
                    format!("Added {} to favorites", book.title)
                } else {
                    format!("Removed {} from favorites", book.title)
                };
                model.set_notice(message);
            }
            Intent::FavoritesCleared => {
                if !model.favorites().is_empty() {
                    model.set_notice("Favorites cleared".to_string());
                }
                model.clear_favorites();
            }
        }
    }
}
