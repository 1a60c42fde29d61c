// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) with themes
// - layout: Calculates screen layout (bars, tables, legend)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the breadcrumb bar and static toolbar
// - listing_table: Renders the folder/file listing with checkboxes
// - selected_table: Renders the select-all header and the backup-set table
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with counts and load time
// - toast: Renders toast notifications (brief pop-up messages)

pub mod breadcrumb;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod listing_table;
pub mod render;
pub mod selected_table;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
