//! The ordered API table.

use rustc_hash::FxHashSet;

use crate::{ApiEntry, Result, SpecError};

/// Command identifier. 0 is reserved for the null dispatch slot.
pub type CommandId = u32;

/// Immutable, ordered table of calls.
///
/// A call's command identifier is its 1-based position, so the dispatch
/// table has `len() + 1` slots with slot 0 unused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiTable {
    entries: Vec<ApiEntry>,
}

impl ApiTable {
    /// Build a table, rejecting duplicate call names.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::DuplicateApi`] for the first repeated name.
    pub fn new(entries: Vec<ApiEntry>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(SpecError::DuplicateApi(entry.name.clone()));
            }
        }
        tracing::debug!(apis = entries.len(), "api table built");
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[ApiEntry] {
        &self.entries
    }

    /// Iterate `(command id, entry)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (CommandId, &ApiEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (command_id(idx), entry))
    }

    /// Iterate only the calls that go through the command buffer.
    pub fn buffered(&self) -> impl Iterator<Item = (CommandId, &ApiEntry)> {
        self.iter().filter(|(_, entry)| entry.is_buffered())
    }

    /// Look up a call by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<(CommandId, &ApiEntry)> {
        self.iter().find(|(_, entry)| entry.name == name)
    }

    /// Number of dispatch-table slots, including the null slot 0.
    #[must_use]
    pub fn dispatch_len(&self) -> usize {
        self.entries.len() + 1
    }
}

/// Command identifier for the entry at `index`.
#[must_use]
pub fn command_id(index: usize) -> CommandId {
    CommandId::try_from(index + 1).unwrap_or(CommandId::MAX)
}
