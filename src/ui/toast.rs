use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::ToastLevel;

fn toast_style(level: ToastLevel) -> (&'static str, Color) {
    match level {
        ToastLevel::Success => ("✓ ", Color::Green),
        ToastLevel::Notice => ("• ", Color::Yellow),
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str, level: ToastLevel) {
    let max_width = (area.width as usize).min(80);
    let toast_width = (message.width() + 6).min(max_width) as u16;
    let toast_height = 3;

    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    // Just below the breadcrumb bar
    let toast_y = 3;

    let toast_area = Rect {
        x: area.x + toast_x,
        y: area.y + toast_y,
        width: toast_width,
        height: toast_height,
    }
    .intersection(area);
    if toast_area.is_empty() {
        return;
    }

    f.render_widget(Clear, toast_area);

    let (icon, color) = toast_style(level);

    let toast_line = Line::from(vec![
        Span::styled(
            icon,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default()),
    ]);

    let toast_block = Block::default().borders(Borders::ALL).border_style(
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD),
    );

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ui::removal_toast;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_toast_style_follows_level() {
        assert_eq!(toast_style(removal_toast(0).1).1, Color::Yellow);
        assert_eq!(toast_style(removal_toast(2).1).1, Color::Green);
    }

    #[test]
    fn test_toast_stays_inside_short_terminal() {
        for height in 1..=6u16 {
            let mut terminal = Terminal::new(TestBackend::new(40, height)).unwrap();
            terminal
                .draw(|f| render_toast(f, f.area(), "Removed 2 items from backup set", ToastLevel::Success))
                .unwrap();
            let buffer = terminal.backend().buffer();
            assert_eq!(buffer.area.height, height);
        }
    }

    #[test]
    fn test_toast_drawn_below_breadcrumb_bar() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| render_toast(f, f.area(), "Listing refreshed", ToastLevel::Success))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row: String = (0..60u16).map(|x| buffer[(x, 4u16)].symbol()).collect();
        assert!(row.contains("Listing refreshed"));
    }
}
