//! Selection Model
//!
//! The backup set: which entries the user has checked, in the order they
//! were added, plus the tri-state "select all" derivation.

use std::collections::HashSet;

use super::types::{CheckboxState, EntryId, SelectionRecord};

/// Entries staged into the backup set
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionModel {
    records: Vec<SelectionRecord>,

    /// Set by a removal commit, cleared by the next toggle or toggle-all.
    /// While set the aggregate checkbox reads as unchecked.
    committed_removal: bool,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the entry if absent, drop it if present.
    ///
    /// Returns true when the entry is in the backup set afterwards.
    pub fn toggle(&mut self, id: EntryId, name: &str, is_folder: bool) -> bool {
        self.committed_removal = false;

        if let Some(pos) = self.records.iter().position(|r| r.id == id) {
            self.records.remove(pos);
            false
        } else {
            self.records.push(SelectionRecord {
                id,
                name: name.to_string(),
                is_folder,
                selected: true,
            });
            true
        }
    }

    /// Flip every existing record: all off when all are on, otherwise all on.
    ///
    /// Entries that were never toggled are not added.
    pub fn toggle_all(&mut self) {
        self.committed_removal = false;

        let all_selected = self.records.iter().all(|r| r.selected);
        for record in &mut self.records {
            record.selected = !all_selected;
        }
    }

    /// Derive the "select all" checkbox state from the records
    pub fn aggregate_state(&self) -> CheckboxState {
        if self.committed_removal {
            return CheckboxState::Unchecked;
        }
        aggregate_of(&self.records)
    }

    /// Record exists and is selected
    pub fn is_checked(&self, id: EntryId) -> bool {
        self.records.iter().any(|r| r.id == id && r.selected)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn records(&self) -> &[SelectionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose flag is on
    pub fn selected_count(&self) -> usize {
        self.records.iter().filter(|r| r.selected).count()
    }

    /// Drop every record matching `remove`, returning how many went away
    pub(crate) fn remove_where<F>(&mut self, mut remove: F) -> usize
    where
        F: FnMut(&SelectionRecord) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| !remove(r));
        self.committed_removal = true;
        before - self.records.len()
    }

    /// Re-point records at a freshly loaded listing, dropping the ones
    /// `map` cannot place. When two records land on the same entry only
    /// the first is kept.
    pub fn rebind<F>(&mut self, mut map: F)
    where
        F: FnMut(EntryId) -> Option<EntryId>,
    {
        let mut seen = HashSet::with_capacity(self.records.len());
        self.records.retain_mut(|record| match map(record.id) {
            Some(new_id) if seen.insert(new_id) => {
                record.id = new_id;
                true
            }
            _ => false,
        });
    }
}

/// Tri-state of a set of records
///
/// # Examples
/// ```
/// use backuptui::model::selection::aggregate_of;
/// use backuptui::model::{CheckboxState, EntryId, SelectionRecord};
///
/// assert_eq!(aggregate_of(&[]), CheckboxState::Unchecked);
///
/// let on = SelectionRecord { id: EntryId(0), name: "A".into(), is_folder: true, selected: true };
/// let off = SelectionRecord { id: EntryId(1), name: "B".into(), is_folder: true, selected: false };
/// assert_eq!(aggregate_of(&[on.clone()]), CheckboxState::Checked);
/// assert_eq!(aggregate_of(&[on, off]), CheckboxState::Indeterminate);
/// ```
pub fn aggregate_of(records: &[SelectionRecord]) -> CheckboxState {
    let selected = records.iter().filter(|r| r.selected).count();
    if selected == 0 {
        CheckboxState::Unchecked
    } else if selected == records.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}
