//! Navigation Model
//!
//! This sub-model contains all state related to navigation:
//! the breadcrumb path and the children currently displayed.

use super::listing::EntryTree;
use super::types::EntryId;

/// Navigation state (breadcrumb path, displayed children)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Label of the implicit root segment
    pub root_label: String,

    /// Entries opened below the root, outermost first
    pub path: Vec<EntryId>,

    /// Children of the folder currently shown (unused at the root)
    pub displayed: Vec<EntryId>,
}

impl NavigationModel {
    /// Create navigation positioned at the root
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            root_label: root_label.into(),
            path: Vec::new(),
            displayed: Vec::new(),
        }
    }

    /// Breadcrumb length including the root segment
    pub fn depth(&self) -> usize {
        self.path.len() + 1
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Open a folder: push it and show its children
    pub fn enter_folder(&mut self, tree: &EntryTree, folder: EntryId) {
        self.path.push(folder);
        self.displayed = tree.children(folder).to_vec();
    }

    /// Open a file: push it, the displayed children stay as they are
    pub fn enter_file(&mut self, file: EntryId) {
        self.path.push(file);
    }

    /// Jump to breadcrumb segment `index` (0 = root)
    ///
    /// Indices past the end of the breadcrumb are ignored.
    pub fn navigate_to(&mut self, tree: &EntryTree, index: usize) {
        if index >= self.depth() {
            return;
        }

        self.path.truncate(index);
        self.displayed = match self.path.last() {
            None => Vec::new(),
            Some(&id) => tree.children(id).to_vec(),
        };
    }

    /// Entries the listing table shows at the current depth
    pub fn visible_entries<'a>(&'a self, tree: &'a EntryTree) -> &'a [EntryId] {
        if self.is_root() {
            tree.roots()
        } else {
            &self.displayed
        }
    }

    /// Breadcrumb segment labels, root first
    pub fn path_labels(&self, tree: &EntryTree) -> Vec<String> {
        std::iter::once(self.root_label.clone())
            .chain(self.path.iter().map(|id| {
                tree.get(*id)
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| "?".to_string())
            }))
            .collect()
    }

    /// Return to the root, dropping the current path
    pub fn reset(&mut self) {
        self.path.clear();
        self.displayed.clear();
    }
}
