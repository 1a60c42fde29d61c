//! Backup-set orchestration methods
//!
//! Checkbox toggles in both tables and the staged-removal commit.

use crate::{logic, App};

impl App {
    /// Toggle the checkbox of the entry under the listing cursor
    pub(crate) fn toggle_entry_under_cursor(&mut self) {
        let Some(entry) = self.model.entry_under_cursor() else {
            return;
        };
        let (id, name, is_folder) = (entry.id, entry.name.clone(), entry.is_folder());

        self.model.toggle_entry(id, &name, is_folder);
        log::debug!(
            "Toggled '{}' ({} in backup set, state {:?})",
            name,
            self.model.selection.len(),
            self.model.selection.aggregate_state()
        );
        self.model.clamp_cursors();
    }

    /// The "select all" checkbox
    pub(crate) fn toggle_all(&mut self) {
        self.model.selection.toggle_all();
        log::debug!("Toggle all -> {:?}", self.model.selection.aggregate_state());
    }

    /// Toggle the removal mark of the backup-set row under the cursor
    pub(crate) fn mark_record_under_cursor(&mut self) {
        let Some(id) = self.model.record_under_cursor().map(|r| r.id) else {
            return;
        };
        self.model.removal.mark_for_removal(id);
    }

    /// "Remove Selected": drop every marked record from the backup set
    pub(crate) fn commit_removal(&mut self) {
        let removed = self
            .model
            .removal
            .commit_removal(&mut self.model.selection);
        log::info!(
            "Removed {} item(s) from backup set, {} left",
            removed,
            self.model.selection.len()
        );
        self.model.clamp_cursors();
        let (message, level) = logic::ui::removal_toast(removed);
        self.model.show_toast(message, level);
    }
}
