//! Main application model with state management
//!
//! `AppModel` owns the filter criteria, the favorites and the UI state.
//! Every change to the criteria or the favorites is written through to
//! persistence before the method returns.

use std::time::{Duration, Instant};

use crate::catalog::{self, Book};
use crate::persistence::Persistence;

use super::favorites::FavoriteSet;
use super::filter::{category_choices, filter_books, CategoryFilter};
use super::types::{ActiveSection, UiState};

/// How long a status notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

pub struct AppModel {
    catalog: &'static [Book],
    categories: Vec<CategoryFilter>,
    search_text: String,
    category: CategoryFilter,
    favorites: FavoriteSet,
    persistence: Persistence,
    ui_state: UiState,
}

impl AppModel {
    /// Restore state from `persistence` over the built-in catalog.
    pub fn new(persistence: Persistence) -> Self {
        Self::with_catalog(catalog::catalog(), persistence)
    }

    pub fn with_catalog(catalog: &'static [Book], persistence: Persistence) -> Self {
        let search_text = persistence.load_search_text();
        let category = persistence.load_category();
        let favorites = persistence.load_favorites();

        tracing::info!(
            search = %search_text,
            category = %category,
            favorites = favorites.len(),
            "Restored state"
        );

        let mut model = Self {
            catalog,
            categories: category_choices(catalog),
            search_text,
            category,
            favorites,
            persistence,
            ui_state: UiState::default(),
        };
        model.clamp_selections();
        model
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn catalog(&self) -> &'static [Book] {
        self.catalog
    }

    /// Category selector choices, `All` first
    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(id)
    }

    pub fn filtered_books(&self) -> Vec<&'static Book> {
        filter_books(self.catalog, &self.search_text, &self.category)
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    // ========================================================================
    // Filter criteria
    // ========================================================================

    pub fn set_search_text(&mut self, text: String) {
        self.search_text = text;
        self.persistence.save_search_text(&self.search_text);
        self.clamp_selections();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.persistence.save_category(&self.category);
        self.ui_state.book_selected = 0;
        self.clamp_selections();
    }

    /// Step through the selector choices, wrapping around.
    ///
    /// A restored category that is not among the choices steps to `All`.
    pub fn cycle_category(&mut self, forward: bool) {
        let count = self.categories.len();
        let next = match self.categories.iter().position(|c| *c == self.category) {
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
            None => 0,
        };
        if let Some(category) = self.categories.get(next).cloned() {
            self.set_category(category);
        }
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    /// Returns `true` when the book is a favorite afterwards.
    pub fn toggle_favorite(&mut self, book: &Book) -> bool {
        let added = self.favorites.toggle(book);
        tracing::debug!(id = book.id, added, "Toggled favorite");
        self.persistence.save_favorites(&self.favorites);
        self.clamp_selections();
        added
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        tracing::debug!("Cleared favorites");
        self.persistence.save_favorites(&self.favorites);
        self.clamp_selections();
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub fn cycle_section_forward(&mut self) {
        self.ui_state.active_section = self.ui_state.active_section.next();
    }

    pub fn cycle_section_backward(&mut self) {
        self.ui_state.active_section = self.ui_state.active_section.prev();
    }

    pub fn set_active_section(&mut self, section: ActiveSection) {
        self.ui_state.active_section = section;
    }

    pub fn move_selection_up(&mut self) {
        let state = &mut self.ui_state;
        match state.active_section {
            ActiveSection::Books => state.book_selected = state.book_selected.saturating_sub(1),
            ActiveSection::Favorites => {
                state.favorite_selected = state.favorite_selected.saturating_sub(1)
            }
            _ => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.ui_state.active_section {
            ActiveSection::Books => self.ui_state.book_selected += 1,
            ActiveSection::Favorites => self.ui_state.favorite_selected += 1,
            _ => {}
        }
        self.clamp_selections();
    }

    pub fn selected_book(&self) -> Option<&'static Book> {
        self.filtered_books()
            .get(self.ui_state.book_selected)
            .copied()
    }

    pub fn selected_favorite(&self) -> Option<&Book> {
        self.favorites.get(self.ui_state.favorite_selected)
    }

    pub fn show_help_popup(&mut self) {
        self.ui_state.show_help_popup = true;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.ui_state.should_quit = quit;
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }

    pub fn set_notice(&mut self, message: String) {
        self.ui_state.notice = Some(message);
        self.ui_state.notice_timestamp = Some(Instant::now());
    }

    pub fn clear_notice(&mut self) {
        self.ui_state.notice = None;
        self.ui_state.notice_timestamp = None;
    }

    pub fn auto_clear_old_notice(&mut self) {
        if let Some(timestamp) = self.ui_state.notice_timestamp {
            if timestamp.elapsed() >= NOTICE_TTL {
                self.clear_notice();
            }
        }
    }

    fn clamp_selections(&mut self) {
        let book_count = self.filtered_books().len();
        let favorite_count = self.favorites.len();
        self.ui_state.clamp_selections(book_count, favorite_count);
    }
}
