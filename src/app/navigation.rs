//! Navigation orchestration methods
//!
//! Methods for traversing the listing:
//! - Opening folders and files
//! - Jumping along the breadcrumb
//! - Moving cursors up/down/first/last

use crate::model::FocusPane;
use crate::{logic, App};

impl App {
    /// Open the entry under the listing cursor
    pub(crate) fn open_entry_under_cursor(&mut self) {
        let Some(entry) = self.model.entry_under_cursor() else {
            return;
        };
        let (id, is_folder, name) = (entry.id, entry.is_folder(), entry.name.clone());

        if is_folder {
            self.model.navigation.enter_folder(&self.model.listing.tree, id);
            self.model.ui.listing_cursor =
                logic::navigation::clamp_cursor(None, self.model.visible_entries().len());
        } else {
            self.model.navigation.enter_file(id);
        }
        self.model.ui.breadcrumb_cursor = self.model.navigation.depth() - 1;

        log::debug!(
            "Opened {} '{}', path depth {}",
            if is_folder { "folder" } else { "file" },
            name,
            self.model.navigation.depth()
        );
    }

    /// Jump to breadcrumb segment `index`
    pub(crate) fn navigate_breadcrumb(&mut self, index: usize) {
        let before = self.model.navigation.depth();
        self.model.navigation.navigate_to(&self.model.listing.tree, index);
        if self.model.navigation.depth() != before {
            self.model.ui.listing_cursor = None;
        }
        self.model.ui.breadcrumb_cursor = self.model.navigation.depth() - 1;
        self.model.clamp_cursors();
    }

    /// Go one breadcrumb segment up
    pub(crate) fn go_to_parent(&mut self) {
        let depth = self.model.navigation.depth();
        if depth > 1 {
            self.navigate_breadcrumb(depth - 2);
        }
    }

    pub(crate) fn move_cursor_down(&mut self) {
        match self.model.ui.focus {
            FocusPane::Listing => {
                let len = self.model.visible_entries().len();
                self.model.ui.listing_cursor =
                    logic::navigation::next_selection(self.model.ui.listing_cursor, len);
            }
            FocusPane::Selected => {
                let len = self.model.selection.len();
                self.model.ui.selected_cursor =
                    logic::navigation::next_selection(self.model.ui.selected_cursor, len);
            }
            FocusPane::Breadcrumbs => self.step_breadcrumb_cursor(true),
        }
    }

    pub(crate) fn move_cursor_up(&mut self) {
        match self.model.ui.focus {
            FocusPane::Listing => {
                let len = self.model.visible_entries().len();
                self.model.ui.listing_cursor =
                    logic::navigation::prev_selection(self.model.ui.listing_cursor, len);
            }
            FocusPane::Selected => {
                let len = self.model.selection.len();
                self.model.ui.selected_cursor =
                    logic::navigation::prev_selection(self.model.ui.selected_cursor, len);
            }
            FocusPane::Breadcrumbs => self.step_breadcrumb_cursor(false),
        }
    }

    pub(crate) fn jump_to_first(&mut self) {
        match self.model.ui.focus {
            FocusPane::Listing if !self.model.visible_entries().is_empty() => {
                self.model.ui.listing_cursor = Some(0);
            }
            FocusPane::Selected if !self.model.selection.is_empty() => {
                self.model.ui.selected_cursor = Some(0);
            }
            FocusPane::Breadcrumbs => self.model.ui.breadcrumb_cursor = 0,
            _ => {}
        }
    }

    pub(crate) fn jump_to_last(&mut self) {
        match self.model.ui.focus {
            FocusPane::Listing => {
                let len = self.model.visible_entries().len();
                self.model.ui.listing_cursor = len.checked_sub(1);
            }
            FocusPane::Selected => {
                self.model.ui.selected_cursor = self.model.selection.len().checked_sub(1);
            }
            FocusPane::Breadcrumbs => {
                self.model.ui.breadcrumb_cursor = self.model.navigation.depth() - 1;
            }
        }
    }

    pub(crate) fn step_breadcrumb_cursor(&mut self, forward: bool) {
        self.model.ui.breadcrumb_cursor = logic::navigation::step_breadcrumb(
            self.model.ui.breadcrumb_cursor,
            self.model.navigation.depth(),
            forward,
        );
    }

    pub(crate) fn cycle_focus(&mut self, forward: bool) {
        let focus = self.model.ui.focus;
        self.model.ui.focus = if forward { focus.next() } else { focus.prev() };
        self.model.clamp_cursors();
    }

    /// Fetch the listing again, superseding a fetch still in flight
    pub(crate) fn refresh_listing(&mut self) {
        self.model.listing.generation = self.loader.request();
    }
}
