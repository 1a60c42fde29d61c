use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::FocusPane;

fn key(k: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(k, Style::default().fg(Color::Yellow)),
        Span::raw(label),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, focus: FocusPane) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if vim_mode {
        hotkey_spans.extend(key("hjkl", ":Nav  "));
        hotkey_spans.extend(key("gg/G", ":First/Last  "));
    } else {
        hotkey_spans.extend(key("↑/↓ j/k", ":Nav  "));
    }
    hotkey_spans.extend(key("Tab", ":Pane  "));

    match focus {
        FocusPane::Listing => {
            hotkey_spans.extend(key("Enter", ":Open  "));
            hotkey_spans.extend(key("←", ":Up  "));
            hotkey_spans.extend(key("Space", ":Check  "));
            hotkey_spans.extend(key("a", ":Toggle All  "));
        }
        FocusPane::Selected => {
            hotkey_spans.extend(key("Space", ":Mark  "));
            hotkey_spans.extend(key("a", ":Toggle All  "));
            hotkey_spans.extend(key("x", ":Remove Selected  "));
        }
        FocusPane::Breadcrumbs => {
            hotkey_spans.extend(key("←/→", ":Segment  "));
            hotkey_spans.extend(key("Enter", ":Go  "));
        }
    }

    hotkey_spans.extend(key("1-9", ":Jump  "));
    hotkey_spans.extend(key("r", ":Refresh  "));
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, focus: FocusPane) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, focus)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, focus: FocusPane) -> u16 {
    // Count lines without the block; line_count() does not account for borders
    let paragraph_for_counting = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, focus)))
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_legend_remove_only_in_selected_pane() {
        let selected = spans_to_text(&build_hotkey_spans(false, FocusPane::Selected));
        let listing = spans_to_text(&build_hotkey_spans(false, FocusPane::Listing));
        assert!(selected.contains("Remove Selected"));
        assert!(!listing.contains("Remove Selected"));
        assert!(listing.contains("Open"));
    }

    #[test]
    fn test_legend_vim_keys() {
        let text = spans_to_text(&build_hotkey_spans(true, FocusPane::Listing));
        assert!(text.contains("hjkl"));
        assert!(text.contains("gg/G"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(300, false, FocusPane::Listing);
        let narrow = calculate_legend_height(30, false, FocusPane::Listing);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
