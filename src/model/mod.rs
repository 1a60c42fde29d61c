//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **ListingModel**: the folder/file arena received from the endpoint
//! - **NavigationModel**: breadcrumb path and displayed children
//! - **SelectionModel**: the backup set and its tri-state checkbox
//! - **RemovalModel**: backup-set members staged for removal
//! - **UiModel**: focus, cursors, preferences, toast
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the runtime (`App`)
//! - Derived values (checkbox state, rows) are computed on read

pub mod listing;
pub mod navigation;
pub mod removal;
pub mod selection;
pub mod types;
pub mod ui;

pub use listing::{EntryTree, ListingModel, RemoteStep};
pub use navigation::NavigationModel;
pub use removal::RemovalModel;
pub use selection::SelectionModel;
pub use types::*;
pub use ui::{Toast, UiModel};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub listing: ListingModel,
    pub navigation: NavigationModel,
    pub selection: SelectionModel,
    pub removal: RemovalModel,
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with an empty listing
    pub fn new(root_label: &str, vim_mode: bool) -> Self {
        Self {
            listing: ListingModel::new(),
            navigation: NavigationModel::new(root_label),
            selection: SelectionModel::new(),
            removal: RemovalModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Entries the listing table shows right now
    pub fn visible_entries(&self) -> &[EntryId] {
        self.navigation.visible_entries(&self.listing.tree)
    }

    /// Entry under the listing cursor
    pub fn entry_under_cursor(&self) -> Option<&Entry> {
        let idx = self.ui.listing_cursor?;
        let id = *self.visible_entries().get(idx)?;
        self.listing.tree.get(id)
    }

    /// Backup-set record under the selected-items cursor
    pub fn record_under_cursor(&self) -> Option<&SelectionRecord> {
        self.ui
            .selected_cursor
            .and_then(|idx| self.selection.records().get(idx))
    }

    /// Check or uncheck an entry from the listing.
    ///
    /// An entry leaving the backup set takes its removal mark with it.
    pub fn toggle_entry(&mut self, id: EntryId, name: &str, is_folder: bool) {
        if !self.selection.toggle(id, name, is_folder) {
            self.removal.unmark(id);
        }
    }

    /// Install a freshly fetched tree.
    ///
    /// Navigation returns to the root. Backup-set records and removal marks
    /// follow their entries into the new tree; entries that disappeared are
    /// dropped.
    pub fn replace_listing(&mut self, tree: EntryTree) {
        let old = std::mem::replace(&mut self.listing.tree, tree);
        let new = &self.listing.tree;
        let remap = |id: EntryId| new.locate(&old.remote_path(id));

        self.selection.rebind(remap);
        self.removal.rebind(remap);
        self.navigation.reset();

        self.ui.breadcrumb_cursor = 0;
        self.ui.listing_cursor = if new.roots().is_empty() { None } else { Some(0) };
        self.ui.selected_cursor = crate::logic::navigation::clamp_cursor(
            self.ui.selected_cursor,
            self.selection.len(),
        );
    }

    /// Keep every cursor inside its current row count
    pub fn clamp_cursors(&mut self) {
        let visible = self.visible_entries().len();
        self.ui.listing_cursor = crate::logic::navigation::clamp_cursor(self.ui.listing_cursor, visible);
        self.ui.selected_cursor =
            crate::logic::navigation::clamp_cursor(self.ui.selected_cursor, self.selection.len());
        self.ui.breadcrumb_cursor = self.ui.breadcrumb_cursor.min(self.navigation.depth() - 1);
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String, level: ToastLevel) {
        self.ui.show_toast(message, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse_listing;

    fn tree(body: &str) -> EntryTree {
        EntryTree::from_remote(&parse_listing(body).unwrap())
    }

    #[test]
    fn test_model_creation() {
        let model = Model::new("Home", false);
        assert!(model.listing.tree.is_empty());
        assert_eq!(model.navigation.depth(), 1);
        assert!(model.selection.is_empty());
        assert!(model.removal.is_empty());
        assert!(model.visible_entries().is_empty());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new("Home", false);
        let _cloned = model.clone();
    }

    #[test]
    fn test_replace_listing_rebinds_selection() {
        let mut model = Model::new("Home", false);
        model.replace_listing(tree(
            r#"[{"id": "1", "name": "A", "data": [{"id": "1", "name": "a.txt"}]},
                {"id": "2", "name": "B"}]"#,
        ));

        let a = model.listing.tree.roots()[0];
        let a_txt = model.listing.tree.children(a)[0];
        let b = model.listing.tree.roots()[1];
        model.selection.toggle(a_txt, "a.txt", false);
        model.selection.toggle(b, "B", true);
        model.removal.mark_for_removal(a_txt);
        model.navigation.enter_folder(&model.listing.tree, a);

        // "B" is gone and a new folder was inserted first
        model.replace_listing(tree(
            r#"[{"id": "9", "name": "New"},
                {"id": "1", "name": "A", "data": [{"id": "1", "name": "a.txt"}]}]"#,
        ));

        assert!(model.navigation.is_root());
        assert_eq!(model.selection.len(), 1);
        let record = &model.selection.records()[0];
        assert_eq!(model.listing.tree.display_path(record.id), "A/a.txt");
        assert!(model.removal.is_marked(record.id));
        assert_eq!(model.ui.listing_cursor, Some(0));
    }

    #[test]
    fn test_reload_keeps_duplicate_sibling_ids_apart() {
        let body = r#"[{"id": "1", "name": "Docs", "data": [
            {"id": "1", "name": "a.txt"},
            {"id": "1", "name": "b.txt"}
        ]}]"#;
        let mut model = Model::new("Home", false);
        model.replace_listing(tree(body));
        let docs = model.listing.tree.roots()[0];
        let children = model.listing.tree.children(docs).to_vec();
        model.toggle_entry(children[0], "a.txt", false);
        model.toggle_entry(children[1], "b.txt", false);
        model.removal.mark_for_removal(children[1]);

        model.replace_listing(tree(body));

        let records = model.selection.records();
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].id, records[1].id);
        for record in records {
            let entry = model.listing.tree.get(record.id).unwrap();
            assert_eq!(entry.name, record.name);
        }
        assert!(!model.removal.is_marked(records[0].id));
        assert!(model.removal.is_marked(records[1].id));
    }

    #[test]
    fn test_unchecking_entry_drops_its_mark() {
        let mut model = Model::new("Home", false);
        model.replace_listing(tree(r#"[{"id": "1", "name": "A"}, {"id": "2", "name": "B"}]"#));
        let a = model.listing.tree.roots()[0];
        let b = model.listing.tree.roots()[1];
        model.toggle_entry(a, "A", true);
        model.toggle_entry(b, "B", true);
        model.removal.mark_for_removal(a);
        model.removal.mark_for_removal(b);

        model.toggle_entry(a, "A", true);
        assert!(!model.selection.contains(a));
        assert!(!model.removal.is_marked(a));
        assert!(model.removal.is_marked(b));

        // Checking it again starts unmarked
        model.toggle_entry(a, "A", true);
        assert!(!model.removal.is_marked(a));
        assert_eq!(model.removal.len(), 1);
    }

    #[test]
    fn test_entry_under_cursor() {
        let mut model = Model::new("Home", false);
        model.replace_listing(tree(r#"[{"id": "1", "name": "A"}, {"id": "2", "name": "B"}]"#));
        model.ui.listing_cursor = Some(1);
        assert_eq!(model.entry_under_cursor().map(|e| e.name.as_str()), Some("B"));
        model.ui.listing_cursor = Some(5);
        assert!(model.entry_under_cursor().is_none());
    }
}
