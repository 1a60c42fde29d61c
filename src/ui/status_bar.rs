use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Values shown in the bottom status bar
pub struct StatusInfo<'a> {
    pub focus: &'a str,
    pub location: &'a str,
    pub visible_count: usize,
    pub backup_count: usize,
    pub selected_count: usize,
    pub marked_count: usize,
    pub loading: bool,
    pub last_load_time_ms: Option<u64>,
}

/// Build the status line: `Focus: Listing | Location: Home/Docs | 3 items | ...`
fn build_status_line(info: &StatusInfo) -> String {
    let mut metrics = vec![
        format!("Focus: {}", info.focus),
        format!("Location: {}", info.location),
        format!("{} items", info.visible_count),
        format!(
            "Backup set: {} ({} selected)",
            info.backup_count, info.selected_count
        ),
        format!("Marked: {}", info.marked_count),
    ];

    if info.loading {
        metrics.push("Loading...".to_string());
    } else if let Some(load_time) = info.last_load_time_ms {
        metrics.push(format!("Load: {}ms", load_time));
    }

    metrics.join(" | ")
}

/// Color the labels (before colons) the way the rest of the chrome does
fn build_status_spans(status_line: &str) -> Vec<Span<'_>> {
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            spans.push(Span::styled(&part[..=colon_pos], Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(&part[colon_pos + 1..]));
        } else {
            spans.push(Span::raw(part));
        }
    }
    spans
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let status_line = build_status_line(info);

    let status_bar = Paragraph::new(Line::from(build_status_spans(&status_line)))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
