//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use crate::api::EntryKind;

/// Stable handle of an entry inside the loaded listing arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

/// A single folder or file of the loaded listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    /// Identifier sent by the listing endpoint (unique among siblings only)
    pub remote_id: String,
    pub name: String,
    pub kind: EntryKind,
    pub parent: Option<EntryId>,
    pub children: Vec<EntryId>,
}

impl Entry {
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }
}

/// One member of the backup set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionRecord {
    pub id: EntryId,
    pub name: String,
    pub is_folder: bool,
    pub selected: bool,
}

/// Aggregate state of the "select all" checkbox
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    /// Whether the control shows the partial-selection mark
    pub fn is_indeterminate(self) -> bool {
        self == CheckboxState::Indeterminate
    }

    pub fn is_checked(self) -> bool {
        self == CheckboxState::Checked
    }
}

/// Pane that receives keyboard input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusPane {
    Breadcrumbs,
    Listing,
    Selected,
}

impl FocusPane {
    pub fn next(self) -> Self {
        match self {
            FocusPane::Breadcrumbs => FocusPane::Listing,
            FocusPane::Listing => FocusPane::Selected,
            FocusPane::Selected => FocusPane::Breadcrumbs,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusPane::Breadcrumbs => FocusPane::Selected,
            FocusPane::Listing => FocusPane::Breadcrumbs,
            FocusPane::Selected => FocusPane::Listing,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FocusPane::Breadcrumbs => "Breadcrumbs",
            FocusPane::Listing => "Listing",
            FocusPane::Selected => "Selected Items",
        }
    }
}

/// How a toast is styled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Something changed
    Success,
    /// The action had nothing to act on
    Notice,
}

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}
