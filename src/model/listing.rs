//! Listing Model
//!
//! The folder/file tree received from the listing endpoint, flattened into
//! an arena. Entries are addressed by `EntryId`, so two entries sharing a
//! name in different folders never collide.

use std::time::Instant;

use super::types::{Entry, EntryId};
use crate::api::RemoteEntry;

/// Arena of all loaded entries
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryTree {
    entries: Vec<Entry>,
    roots: Vec<EntryId>,
}

impl EntryTree {
    /// Build the arena from the endpoint's top-level records
    pub fn from_remote(records: &[RemoteEntry]) -> Self {
        let mut tree = Self::default();
        for record in records {
            let id = tree.insert(record, None, 0);
            tree.roots.push(id);
        }
        tree
    }

    fn insert(&mut self, record: &RemoteEntry, parent: Option<EntryId>, depth: usize) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(Entry {
            id,
            remote_id: record.id.clone(),
            name: record.name.clone(),
            kind: record.resolved_kind(depth),
            parent,
            children: Vec::new(),
        });

        let children: Vec<EntryId> = record
            .children
            .iter()
            .map(|child| self.insert(child, Some(id), depth + 1))
            .collect();
        self.entries[id.0].children = children;

        id
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    /// Top-level entries in endpoint order
    pub fn roots(&self) -> &[EntryId] {
        &self.roots
    }

    /// Children of an entry (empty for files and unknown ids)
    pub fn children(&self, id: EntryId) -> &[EntryId] {
        self.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Steps from the top level down to `id`, by remote id
    ///
    /// Remote ids are only unique among siblings, and not even that when the
    /// endpoint repeats one, so each step also records which occurrence of
    /// the id it is.
    pub fn remote_path(&self, id: EntryId) -> Vec<RemoteStep> {
        let mut path = Vec::new();
        let mut current = self.get(id);
        while let Some(entry) = current {
            let siblings = match entry.parent {
                Some(parent) => self.children(parent),
                None => self.roots(),
            };
            let occurrence = siblings
                .iter()
                .take_while(|sibling| **sibling != entry.id)
                .filter(|sibling| self.remote_id_is(**sibling, &entry.remote_id))
                .count();
            path.push(RemoteStep {
                remote_id: entry.remote_id.clone(),
                occurrence,
            });
            current = entry.parent.and_then(|p| self.get(p));
        }
        path.reverse();
        path
    }

    /// Find an entry by the steps `remote_path` produced
    pub fn locate(&self, remote_path: &[RemoteStep]) -> Option<EntryId> {
        let (first, rest) = remote_path.split_first()?;
        let mut current = self.find_among(&self.roots, first)?;
        for step in rest {
            current = self.find_among(self.children(current), step)?;
        }
        Some(current)
    }

    fn find_among(&self, ids: &[EntryId], step: &RemoteStep) -> Option<EntryId> {
        ids.iter()
            .copied()
            .filter(|id| self.remote_id_is(*id, &step.remote_id))
            .nth(step.occurrence)
    }

    fn remote_id_is(&self, id: EntryId, remote_id: &str) -> bool {
        self.get(id).is_some_and(|e| e.remote_id == remote_id)
    }

    /// Names from the top level down to `id`, joined with '/'
    pub fn display_path(&self, id: EntryId) -> String {
        let mut names = Vec::new();
        let mut current = self.get(id);
        while let Some(entry) = current {
            names.push(entry.name.as_str());
            current = entry.parent.and_then(|p| self.get(p));
        }
        names.reverse();
        names.join("/")
    }
}

/// One level of a remote path: the `occurrence`-th sibling carrying `remote_id`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteStep {
    pub remote_id: String,
    pub occurrence: usize,
}

impl RemoteStep {
    pub fn new(remote_id: impl Into<String>, occurrence: usize) -> Self {
        Self {
            remote_id: remote_id.into(),
            occurrence,
        }
    }
}

/// Loaded listing plus load bookkeeping
#[derive(Clone, Debug, Default)]
pub struct ListingModel {
    pub tree: EntryTree,

    /// Generation of the most recent fetch request
    pub generation: u64,

    /// When the current tree was received
    pub loaded_at: Option<Instant>,

    /// Round-trip time of the last successful fetch
    pub last_load_time_ms: Option<u64>,
}

impl ListingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a fetch result belongs to the latest request
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
