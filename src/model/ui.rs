//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! focus, cursors, preferences and transient messages.

use std::time::Instant;

use super::types::{FocusPane, ToastLevel, VimCommandState};

/// Brief pop-up message
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub shown_at: Instant,
}

/// UI preferences and visual state
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Pane receiving keyboard input
    pub focus: FocusPane,

    /// Cursor row in the listing table
    pub listing_cursor: Option<usize>,

    /// Cursor row in the selected-items table
    pub selected_cursor: Option<usize>,

    /// Highlighted breadcrumb segment
    pub breadcrumb_cursor: usize,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Toast currently on screen
    pub toast_message: Option<Toast>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            focus: FocusPane::Listing,
            listing_cursor: None,
            selected_cursor: None,
            breadcrumb_cursor: 0,
            vim_mode,
            vim_command_state: VimCommandState::None,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String, level: ToastLevel) {
        self.toast_message = Some(Toast {
            message,
            level,
            shown_at: Instant::now(),
        });
    }

    /// Check if toast has been visible long enough
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some(toast) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(toast.shown_at.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert_eq!(model.focus, FocusPane::Listing);
        assert!(model.listing_cursor.is_none());
        assert!(!model.vim_mode);
        assert!(!model.should_quit);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        assert!(model.toast_message.is_none());

        model.show_toast("Test".to_string(), ToastLevel::Notice);
        assert_eq!(model.toast_message.as_ref().map(|t| t.level), Some(ToastLevel::Notice));
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }
}
