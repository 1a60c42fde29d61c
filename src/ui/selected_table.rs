use super::icons::IconRenderer;
use crate::logic::rows::SelectedRow;
use crate::model::CheckboxState;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Build the header line: tri-state checkbox, hint glyph, remove action
pub fn build_header_spans(
    state: CheckboxState,
    marked: usize,
    icons: &IconRenderer,
) -> Vec<Span<'static>> {
    let mut spans = vec![icons.tri_state(state), icons.aggregate_hint(state), icons.archive()];
    let action_style = if marked > 0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    spans.push(Span::styled("Remove Selected", action_style));
    if marked > 0 {
        spans.push(Span::raw(format!(" ({})", marked)));
    }
    spans
}

/// Render the "Selected Items" header with the select-all checkbox
pub fn render_selected_header(
    f: &mut Frame,
    area: Rect,
    state: CheckboxState,
    marked: usize,
    is_focused: bool,
    icons: &IconRenderer,
) {
    let header = Paragraph::new(Line::from(build_header_spans(state, marked, icons))).block(
        Block::default()
            .title("Selected Items")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if is_focused { Color::Cyan } else { Color::Gray })),
    );
    f.render_widget(header, area);
}

/// Render the backup-set table
pub fn render_selected_table(
    f: &mut Frame,
    area: Rect,
    rows: &[SelectedRow],
    state: &mut TableState,
    is_focused: bool,
    icons: &IconRenderer,
) {
    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| match row {
            SelectedRow::Placeholder(text) => Row::new(vec![
                Cell::from(""),
                Cell::from(Span::styled(
                    *text,
                    Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
                )),
                Cell::from(""),
                Cell::from(""),
            ]),
            SelectedRow::Item {
                name,
                is_folder,
                marked,
                size,
                modified,
                ..
            } => Row::new(vec![
                Cell::from(icons.removal_mark(*marked)),
                Cell::from(Line::from(vec![icons.entry(*is_folder), Span::raw(name.clone())])),
                Cell::from(*size),
                Cell::from(*modified).style(Style::default().fg(Color::Rgb(120, 120, 120))),
            ]),
        })
        .collect();

    let header = Row::new(vec!["", "Selected File/Folder", "Size", "Date Modified"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Length(4),
        Constraint::Min(12),
        Constraint::Length(5),
        Constraint::Length(23),
    ];

    let mut table = Table::new(table_rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if is_focused { Color::Cyan } else { Color::Gray })),
    );

    let has_items = rows.iter().any(|r| matches!(r, SelectedRow::Item { .. }));
    if is_focused && has_items {
        table = table
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(table, area, state);
    } else {
        let mut empty_state = TableState::default();
        f.render_stateful_widget(table, area, &mut empty_state);
    }
}
