// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI rendering

use plugdex_core::PluginRecord;
use plugdex_render::card::MAX_CARD_KEYWORDS;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::App;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Plugin list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_input(frame, app, chunks[0]);
    render_plugin_list(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    if let Some(record) = app.detail_record() {
        let repository_url = app.index.repository_url(&record.id);
        render_detail(frame, record, repository_url);
    }
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.search_pending() { " Search … " } else { " Search " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    frame.render_widget(Paragraph::new(app.input()).block(block), area);

    frame.set_cursor_position(search_cursor(area, app.input()));
}

/// Cursor cell after the typed text, kept inside the box's borders.
fn search_cursor(area: Rect, input: &str) -> (u16, u16) {
    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(1).saturating_add(typed);
    (x.min(area.right().saturating_sub(2)), area.y.saturating_add(1))
}

fn render_plugin_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let view = app.catalog.view();
    let title = format!(" Plugins [{}] ", view.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(title);

    if view.is_empty() {
        let empty = Paragraph::new("No plugins match your search.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view.iter().map(|record| list_item(record)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn list_item(record: &PluginRecord) -> ListItem<'static> {
    let m = &record.manifest;
    let mut keywords: Vec<String> = m.keywords.iter().take(MAX_CARD_KEYWORDS).cloned().collect();
    if m.keywords.len() > MAX_CARD_KEYWORDS {
        keywords.push(format!("+{}", m.keywords.len() - MAX_CARD_KEYWORDS));
    }

    ListItem::new(Line::from(vec![
        Span::styled(m.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!(" v{}", m.version), Style::default().fg(Color::Cyan)),
        Span::styled(format!("  {}", m.author.name), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("  {}", keywords.join(", ")), Style::default().fg(Color::Yellow)),
    ]))
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_text = format!(
        " {} of {} │ Sort: {} │ Tab: sort │ Enter: details │ Esc: {}",
        app.catalog.visible_len(),
        app.catalog.len(),
        app.catalog.sort(),
        if app.detail_record().is_some() { "close" } else { "quit" }
    );

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn render_detail(frame: &mut Frame, record: &PluginRecord, repository_url: Option<&str>) {
    let m = &record.manifest;
    let host = &m.host_application;
    let area = centered(frame.area(), 70, 70);

    let compatibility = match &host.max_version {
        Some(max) => format!("{} - {}", host.min_version, max),
        None => format!("{}+", host.min_version),
    };
    let author = if m.author.url.is_empty() {
        m.author.name.clone()
    } else {
        format!("{} <{}>", m.author.name, m.author.url)
    };

    let mut lines = vec![
        field("Version", &m.version),
        field("Manifest version", &m.manifest_version),
        field("Author", &author),
        field("Compatibility", &compatibility),
        field("License", &m.license),
        field("Keywords", &m.keywords.join(", ")),
    ];
    if let Some(url) = repository_url {
        lines.push(field("Source", url));
    }
    lines.push(Line::default());
    lines.push(Line::from(m.description.clone()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" {} ", m.name))
        .title_bottom(" Esc: close ");

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<18}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

/// A rectangle of the given percentage size, centered in `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
