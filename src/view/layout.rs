//! Layout rendering (header, filter controls, status footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, AppModel};
use super::utils::border_style;

pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Book Club Library",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Search, category and favorites are remembered between sessions.",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_controls(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(30), // Category selector
        ])
        .split(area);

    let section = model.ui_state().active_section;
    let search_focused = section == ActiveSection::Search;

    let (search_text, search_style) = if model.search_text().is_empty() {
        ("Search by book title...", Style::default().fg(Color::DarkGray))
    } else if search_focused {
        (model.search_text(), Style::default().fg(Color::Green))
    } else {
        (model.search_text(), Style::default().fg(Color::White))
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(border_style(search_focused)),
    );
    frame.render_widget(search, chunks[0]);

    let category_focused = section == ActiveSection::Category;
    let category_style = if category_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let category = Paragraph::new(format!("◀ {} ▶", model.category()))
        .style(category_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Category ")
                .padding(Padding::horizontal(1))
                .border_style(border_style(category_focused)),
        );
    frame.render_widget(category, chunks[1]);
}

pub fn render_footer(frame: &mut Frame, area: Rect, model: &AppModel) {
    let search = if model.search_text().is_empty() {
        " "
    } else {
        model.search_text()
    };
    let status = format!(
        " Search: \"{}\" | Category: {} | Total favorites: {}",
        search,
        model.category(),
        model.favorites().len()
    );

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title_bottom(Line::from(" h: help | q: quit ").right_aligned());
    if let Some(notice) = &model.ui_state().notice {
        block = block.title(Span::styled(
            format!(" {} ", notice),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let footer = Paragraph::new(status)
        .style(Style::default().fg(Color::Gray))
        .block(block);
    frame.render_widget(footer, area);
}
