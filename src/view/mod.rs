//! View module - UI rendering
//!
//! This module renders the application state using ratatui. It never
//! changes state; everything it shows is read from [`AppModel`].
//!
//! - `utils`: shared helpers (focus styles, truncation, scrollable lists)
//! - `layout`: header, filter controls and status footer
//! - `content`: book list and favorites panel
//! - `overlays`: help popup

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::AppModel;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title + description
                Constraint::Length(3), // Search + category
                Constraint::Min(0),    // Books + favorites
                Constraint::Length(3), // Status footer
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0]);
        layout::render_controls(frame, chunks[1], model);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(65), // Book list
                Constraint::Percentage(35), // Favorites panel
            ])
            .split(chunks[2]);

        content::render_book_list(frame, main_chunks[0], model);
        content::render_favorites_panel(frame, main_chunks[1], model);

        layout::render_footer(frame, chunks[3], model);

        if model.is_help_popup_open() {
            overlays::render_help_popup(frame);
        }
    }
}
