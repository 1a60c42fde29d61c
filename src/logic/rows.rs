//! Table row construction
//!
//! Builds the rows of the listing and selected-items tables from the model.
//! Rendering code only styles what these functions return.

use chrono::NaiveDateTime;

use super::formatting::{format_modified, BACKUP_SET_TIMESTAMP, SIZE_PLACEHOLDER};
use crate::api::EntryKind;
use crate::model::{EntryId, Model};

/// Text of the single row shown while the backup set is empty
pub const EMPTY_BACKUP_SET_TEXT: &str = "Add content to backup set";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub id: EntryId,
    pub name: String,
    pub kind: EntryKind,
    pub checked: bool,
    pub modified: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectedRow {
    Placeholder(&'static str),
    Item {
        id: EntryId,
        name: String,
        is_folder: bool,
        marked: bool,
        size: &'static str,
        modified: &'static str,
    },
}

/// Rows of the listing table at the current depth
///
/// Every row carries `now` as its modification time; the listing has no
/// real file metadata.
pub fn listing_rows(model: &Model, now: &NaiveDateTime) -> Vec<ListingRow> {
    let modified = format_modified(now);
    model
        .visible_entries()
        .iter()
        .filter_map(|id| model.listing.tree.get(*id))
        .map(|entry| ListingRow {
            id: entry.id,
            name: entry.name.clone(),
            kind: entry.kind,
            checked: model.selection.is_checked(entry.id),
            modified: modified.clone(),
        })
        .collect()
}

/// Rows of the selected-items table
pub fn selected_rows(model: &Model) -> Vec<SelectedRow> {
    if model.selection.is_empty() {
        return vec![SelectedRow::Placeholder(EMPTY_BACKUP_SET_TEXT)];
    }

    model
        .selection
        .records()
        .iter()
        .map(|record| SelectedRow::Item {
            id: record.id,
            name: record.name.clone(),
            is_folder: record.is_folder,
            marked: model.removal.is_marked(record.id),
            size: SIZE_PLACEHOLDER,
            modified: BACKUP_SET_TIMESTAMP,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse_listing;
    use crate::model::EntryTree;
    use chrono::NaiveDate;

    fn model() -> Model {
        let mut model = Model::new("Home", false);
        let body = r#"[
            {"id": "1", "name": "Docs", "data": [{"id": "1", "name": "a.txt"}]},
            {"id": "2", "name": "Music"}
        ]"#;
        model.replace_listing(EntryTree::from_remote(&parse_listing(body).unwrap()));
        model
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_selection_single_placeholder() {
        let rows = selected_rows(&model());
        assert_eq!(rows, vec![SelectedRow::Placeholder("Add content to backup set")]);
    }

    #[test]
    fn test_root_rows_are_top_level() {
        let model = model();
        let rows = listing_rows(&model, &now());
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Docs", "Music"]);
        assert!(rows.iter().all(|r| r.kind == EntryKind::Folder));
        assert!(rows.iter().all(|r| r.modified == "10/19/2026, 9:30:00 AM"));
    }

    #[test]
    fn test_checked_follows_selected_flag() {
        let mut model = model();
        let docs = model.listing.tree.roots()[0];
        model.selection.toggle(docs, "Docs", true);
        assert!(listing_rows(&model, &now())[0].checked);

        // still a member, but flag off
        model.selection.toggle_all();
        assert!(!listing_rows(&model, &now())[0].checked);
    }

    #[test]
    fn test_selected_rows_carry_marks_and_literals() {
        let mut model = model();
        let docs = model.listing.tree.roots()[0];
        let music = model.listing.tree.roots()[1];
        model.selection.toggle(docs, "Docs", true);
        model.selection.toggle(music, "Music", true);
        model.removal.mark_for_removal(music);

        let rows = selected_rows(&model);
        assert_eq!(rows.len(), 2);
        match &rows[1] {
            SelectedRow::Item { name, marked, size, modified, .. } => {
                assert_eq!(name, "Music");
                assert!(*marked);
                assert_eq!(*size, "-");
                assert_eq!(*modified, "2024/08/30 11:56:42 AM");
            }
            other => panic!("unexpected row {:?}", other),
        }
    }

    #[test]
    fn test_nested_rows_are_files() {
        let mut model = model();
        let docs = model.listing.tree.roots()[0];
        model.navigation.enter_folder(&model.listing.tree, docs);
        let rows = listing_rows(&model, &now());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, EntryKind::File);
    }
}
