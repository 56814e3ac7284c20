//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::{AppController, Intent};

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let mut model = self.model.lock().await;

        // Help popup blocks all other interactions
        if model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup();
            }
            return;
        }

        let section = model.ui_state().active_section;

        match key.code {
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                model.cycle_section_backward();
                return;
            }
            KeyCode::Tab => {
                model.cycle_section_forward();
                return;
            }
            KeyCode::BackTab => {
                model.cycle_section_backward();
                return;
            }
            _ => {}
        }

        // Search box captures typing
        if section == ActiveSection::Search {
            let intent = match key.code {
                KeyCode::Esc => Some(Intent::SearchTextChanged(String::new())),
                KeyCode::Backspace => {
                    let mut text = model.search_text().to_string();
                    text.pop().map(|_| Intent::SearchTextChanged(text))
                }
                KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    if c == 'q' || c == 'Q' {
                        model.set_should_quit(true);
                    }
                    None
                }
                KeyCode::Char(c) => {
                    let mut text = model.search_text().to_string();
                    text.push(c);
                    Some(Intent::SearchTextChanged(text))
                }
                KeyCode::Enter | KeyCode::Down => {
                    model.set_active_section(ActiveSection::Books);
                    None
                }
                _ => None,
            };
            if let Some(intent) = intent {
                Self::apply(&mut model, intent);
            }
            return;
        }

        match (section, key.code) {
            (ActiveSection::Category, KeyCode::Left | KeyCode::Up) => {
                model.cycle_category(false);
            }
            (ActiveSection::Category, KeyCode::Right | KeyCode::Down) => {
                model.cycle_category(true);
            }
            (ActiveSection::Books, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('F')) => {
                if let Some(book) = model.selected_book() {
                    Self::apply(&mut model, Intent::FavoriteToggled(book.clone()));
                }
            }
            (ActiveSection::Favorites, KeyCode::Enter | KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('X')) => {
                if let Some(book) = model.selected_favorite().cloned() {
                    Self::apply(&mut model, Intent::FavoriteToggled(book));
                }
            }
            (_, KeyCode::Up) => model.move_selection_up(),
            (_, KeyCode::Down) => model.move_selection_down(),
            (_, KeyCode::Char('c') | KeyCode::Char('C')) => {
                Self::apply(&mut model, Intent::FavoritesCleared);
            }
            (_, KeyCode::Char('/') | KeyCode::Char('g') | KeyCode::Char('G')) => {
                model.set_active_section(ActiveSection::Search);
            }
            (_, KeyCode::Char('h') | KeyCode::Char('H')) => model.show_help_popup(),
            (_, KeyCode::Esc) => model.clear_notice(),
            (_, KeyCode::Char('q') | KeyCode::Char('Q')) => model.set_should_quit(true),
            _ => {}
        }
    }
}
