//! Staged-Removal Model
//!
//! Members of the backup set marked for removal. Nothing leaves the
//! selection until the marks are committed.

use std::collections::BTreeSet;

use super::selection::SelectionModel;
use super::types::EntryId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemovalModel {
    marks: BTreeSet<EntryId>,
}

impl RemovalModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark if unmarked, unmark if marked
    pub fn mark_for_removal(&mut self, id: EntryId) {
        if !self.marks.remove(&id) {
            self.marks.insert(id);
        }
    }

    /// Drop the mark of an entry that left the backup set
    pub fn unmark(&mut self, id: EntryId) {
        self.marks.remove(&id);
    }

    pub fn is_marked(&self, id: EntryId) -> bool {
        self.marks.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Remove every marked record from `selection` and clear the marks.
    ///
    /// Returns the number of records removed. Marks naming entries that are
    /// not in the selection remove nothing.
    pub fn commit_removal(&mut self, selection: &mut SelectionModel) -> usize {
        let marks = std::mem::take(&mut self.marks);
        selection.remove_where(|record| marks.contains(&record.id))
    }

    /// Re-point marks at a freshly loaded listing
    pub fn rebind<F>(&mut self, map: F)
    where
        F: FnMut(EntryId) -> Option<EntryId>,
    {
        self.marks = std::mem::take(&mut self.marks)
            .into_iter()
            .filter_map(map)
            .collect();
    }
}
