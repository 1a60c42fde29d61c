use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::FocusPane;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Breadcrumb + toolbar bar at the top
    pub breadcrumb_area: Rect,
    /// Folder/file listing table
    pub listing_area: Rect,
    /// "Select all" checkbox and "Remove Selected" action
    pub selected_header_area: Rect,
    /// Backup-set table
    pub selected_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, vim_mode: bool, focus: FocusPane) -> LayoutInfo {
    let legend_height = super::legend::calculate_legend_height(terminal_size.width, vim_mode, focus);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Breadcrumb bar
            Constraint::Min(6),                // Tables
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    // Listing gets the larger share
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    let selected = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(content[1]);

    LayoutInfo {
        breadcrumb_area: main_chunks[0],
        listing_area: content[0],
        selected_header_area: selected[0],
        selected_area: selected[1],
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}
