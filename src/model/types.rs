//! UI-only state: focus, list selections, overlays

use std::time::Instant;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Search,
    Category,
    Books,
    Favorites,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Category,
            ActiveSection::Category => ActiveSection::Books,
            ActiveSection::Books => ActiveSection::Favorites,
            ActiveSection::Favorites => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Favorites,
            ActiveSection::Category => ActiveSection::Search,
            ActiveSection::Books => ActiveSection::Category,
            ActiveSection::Favorites => ActiveSection::Books,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    /// Index into the filtered book list
    pub book_selected: usize,
    /// Index into the favorites list
    pub favorite_selected: usize,
    pub notice: Option<String>,
    pub notice_timestamp: Option<Instant>,
    pub show_help_popup: bool,
    pub should_quit: bool,
}

impl UiState {
    /// Keep list selections inside lists of the given lengths.
    pub fn clamp_selections(&mut self, book_count: usize, favorite_count: usize) {
        self.book_selected = self.book_selected.min(book_count.saturating_sub(1));
        self.favorite_selected = self.favorite_selected.min(favorite_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_round_trips() {
        let mut section = ActiveSection::Search;
        for _ in 0..4 {
            section = section.next();
        }
        assert_eq!(section, ActiveSection::Search);
        assert_eq!(ActiveSection::Search.prev(), ActiveSection::Favorites);
        assert_eq!(ActiveSection::Books.next().prev(), ActiveSection::Books);
    }

    #[test]
    fn test_clamp_selections() {
        let mut state = UiState {
            book_selected: 5,
            favorite_selected: 2,
            ..Default::default()
        };
        state.clamp_selections(3, 0);
        assert_eq!(state.book_selected, 2);
        assert_eq!(state.favorite_selected, 0);
    }
}
