//! Main content rendering (book list, favorites panel)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, AppModel};
use super::utils::{border_style, render_scrollable_list, row_style, truncate_string};

const FAVORITE_MARK: &str = "♥";

pub fn render_book_list(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.ui_state().active_section == ActiveSection::Books;
    let books = model.filtered_books();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Books ({}) ", books.len()))
        .padding(Padding::horizontal(1))
        .border_style(border_style(is_focused));

    if books.is_empty() {
        let empty = Paragraph::new("No matching books.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Format: "{mark}  {title}   {author}   {category}"
    let content_width = area.width.saturating_sub(4) as usize;
    let remaining = content_width.saturating_sub(1 + 2 + 3 + 3);
    let title_width = remaining * 40 / 100;
    let author_width = remaining * 35 / 100;
    let category_width = remaining.saturating_sub(title_width + author_width);

    let selected = model.ui_state().book_selected;
    let items: Vec<ListItem> = books
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let is_favorite = model.is_favorite(book.id);
            let mark = if is_favorite { FAVORITE_MARK } else { " " };
            let style = row_style(i == selected, is_focused);
            let mark_style = if is_favorite {
                Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD)
            } else {
                style
            };

            ListItem::new(Line::from(vec![
                Span::styled(mark, mark_style),
                Span::raw("  "),
                Span::styled(truncate_string(&book.title, title_width), style),
                Span::raw("   "),
                Span::styled(
                    truncate_string(&book.author, author_width),
                    style.fg(Color::Gray),
                ),
                Span::raw("   "),
                Span::styled(
                    truncate_string(&book.category, category_width),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    render_scrollable_list(frame, area, items, selected, block);
}

pub fn render_favorites_panel(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.ui_state().active_section == ActiveSection::Favorites;
    let favorites = model.favorites();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} Favorites ({}) ", FAVORITE_MARK, favorites.len()),
            Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" x: remove | c: clear ").right_aligned())
        .padding(Padding::horizontal(1))
        .border_style(border_style(is_focused));

    if favorites.is_empty() {
        let empty = Paragraph::new("No favorites yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selected = model.ui_state().favorite_selected;
    let items: Vec<ListItem> = favorites
        .books()
        .iter()
        .enumerate()
        .map(|(i, book)| {
            ListItem::new(format!("{} — {}", book.title, book.author))
                .style(row_style(i == selected, is_focused))
        })
        .collect();

    render_scrollable_list(frame, area, items, selected, block);
}
