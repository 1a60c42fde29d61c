use super::icons::IconRenderer;
use crate::logic::formatting::truncate_name;
use crate::logic::rows::ListingRow;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

/// Render the folder/file listing table
pub fn render_listing_table(
    f: &mut Frame,
    area: Rect,
    rows: &[ListingRow],
    state: &mut TableState,
    title: &str,
    is_focused: bool,
    icons: &IconRenderer,
) {
    // Borders, checkbox, type and date columns, highlight symbol
    let name_width = area.width.saturating_sub(2 + 5 + 8 + 24 + 6) as usize;

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            let is_folder = row.kind.is_folder();
            let name = Line::from(vec![
                icons.entry(is_folder),
                Span::raw(truncate_name(&row.name, name_width.saturating_sub(3))),
            ]);
            Row::new(vec![
                Cell::from(icons.checkbox(row.checked)),
                Cell::from(name),
                Cell::from(row.kind.label()),
                Cell::from(row.modified.clone()).style(Style::default().fg(Color::Rgb(120, 120, 120))),
            ])
        })
        .collect();

    let header = Row::new(vec!["", "Name", "Type", "Date Modified"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Length(4),
        Constraint::Min(10),
        Constraint::Length(7),
        Constraint::Length(24),
    ];

    let mut table = Table::new(table_rows, widths).header(header).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if is_focused { Color::Cyan } else { Color::Gray })),
    );

    if is_focused {
        table = table
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(table, area, state);
    } else {
        table = table.highlight_symbol("  ");
        f.render_stateful_widget(table, area, state);
    }
}
