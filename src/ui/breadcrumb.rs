use super::icons::IconRenderer;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the breadcrumb spans: `Home > Docs > a.txt`
///
/// The last segment is the current location; the highlighted segment is
/// the one Enter would jump to when the bar has focus.
pub fn build_breadcrumb_spans(
    labels: &[String],
    highlighted: Option<usize>,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    let last = labels.len().saturating_sub(1);

    for (idx, label) in labels.iter().enumerate() {
        let mut style = Style::default().fg(Color::Cyan);
        if idx == last {
            style = style.add_modifier(Modifier::BOLD);
        }
        if highlighted == Some(idx) {
            style = style.bg(Color::DarkGray).add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(label.clone(), style));

        if idx < last {
            spans.push(Span::styled(" > ", Style::default().fg(Color::Gray)));
        }
    }

    spans
}

/// Static toolbar labels on the right of the bar
fn build_toolbar_spans(icons: &IconRenderer) -> Vec<Span<'static>> {
    vec![
        icons.archive(),
        Span::raw("Archive | "),
        icons.search(),
        Span::raw("Search | "),
        icons.plus(),
        Span::raw("Create New Backup Set"),
    ]
}

/// Render the breadcrumb bar with the toolbar
pub fn render_breadcrumb_bar(
    f: &mut Frame,
    area: Rect,
    labels: &[String],
    cursor: usize,
    is_focused: bool,
    icons: &IconRenderer,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Location")
        .border_style(Style::default().fg(if is_focused { Color::Cyan } else { Color::Gray }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(46)])
        .split(inner);

    let mut spans = vec![icons.home()];
    spans.extend(build_breadcrumb_spans(labels, is_focused.then_some(cursor)));
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let toolbar = Paragraph::new(Line::from(build_toolbar_spans(icons)))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(toolbar, chunks[1]);
}
