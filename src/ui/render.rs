use crate::logic::rows;
use crate::model::FocusPane;
use crate::App;
use chrono::Local;
use ratatui::widgets::TableState;
use ratatui::Frame;

use super::{breadcrumb, layout, legend, listing_table, selected_table, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let focus = app.model.ui.focus;
    let layout_info = layout::calculate_layout(size, app.model.ui.vim_mode, focus);

    let labels = app.model.navigation.path_labels(&app.model.listing.tree);
    breadcrumb::render_breadcrumb_bar(
        f,
        layout_info.breadcrumb_area,
        &labels,
        app.model.ui.breadcrumb_cursor,
        focus == FocusPane::Breadcrumbs,
        &app.icon_renderer,
    );

    let now = Local::now().naive_local();
    let listing = rows::listing_rows(&app.model, &now);
    let title = if app.loader.is_loading() && app.model.listing.loaded_at.is_none() {
        "Loading...".to_string()
    } else {
        labels.join("/")
    };
    let mut listing_state = TableState::default();
    listing_state.select(app.model.ui.listing_cursor);
    listing_table::render_listing_table(
        f,
        layout_info.listing_area,
        &listing,
        &mut listing_state,
        &title,
        focus == FocusPane::Listing,
        &app.icon_renderer,
    );

    selected_table::render_selected_header(
        f,
        layout_info.selected_header_area,
        app.model.selection.aggregate_state(),
        app.model.removal.len(),
        focus == FocusPane::Selected,
        &app.icon_renderer,
    );

    let selected = rows::selected_rows(&app.model);
    let mut selected_state = TableState::default();
    selected_state.select(app.model.ui.selected_cursor);
    selected_table::render_selected_table(
        f,
        layout_info.selected_area,
        &selected,
        &mut selected_state,
        focus == FocusPane::Selected,
        &app.icon_renderer,
    );

    legend::render_legend(f, layout_info.legend_area, app.model.ui.vim_mode, focus);

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &status_bar::StatusInfo {
            focus: focus.as_str(),
            location: &labels.join("/"),
            visible_count: listing.len(),
            backup_count: app.model.selection.len(),
            selected_count: app.model.selection.selected_count(),
            marked_count: app.model.removal.len(),
            loading: app.loader.is_loading(),
            last_load_time_ms: app.model.listing.last_load_time_ms,
        },
    );

    // Toast goes last so it draws over everything
    if let Some(t) = &app.model.ui.toast_message {
        toast::render_toast(f, size, &t.message, t.level);
    }
}
