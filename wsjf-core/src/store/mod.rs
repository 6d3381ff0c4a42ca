//! Initiative storage.
//!
//! [`InitiativeRepository`] is the seam for swapping storage backends. The
//! only shipped backend is [`MemoryStore`], which lives for the process and
//! is lost on exit.

use uuid::Uuid;

use crate::error::Result;
use crate::models::{CreateInitiativeInput, Initiative};

/// Ordered collection of initiatives with add/remove/list capabilities.
pub trait InitiativeRepository {
    /// Label reported by the diagnostic report, e.g. `"in-memory"`.
    fn storage_mode(&self) -> &'static str;

    /// Validate the draft, stamp it and append it.
    ///
    /// A rejected draft leaves the repository unchanged.
    fn add(&mut self, input: CreateInitiativeInput) -> Result<Initiative>;

    /// Remove by id. Returns whether anything was removed.
    fn remove(&mut self, id: Uuid) -> bool;

    /// All initiatives in insertion order.
    fn list(&self) -> Vec<Initiative>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Volatile, insertion-ordered store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    initiatives: Vec<Initiative>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: Uuid) -> Option<&Initiative> {
        self.initiatives.iter().find(|i| i.id == id)
    }
}

impl InitiativeRepository for MemoryStore {
    fn storage_mode(&self) -> &'static str {
        "in-memory"
    }

    fn add(&mut self, input: CreateInitiativeInput) -> Result<Initiative> {
        let initiative = Initiative::create(input)?;
        tracing::debug!(id = %initiative.id, name = %initiative.name, "Added initiative");
        self.initiatives.push(initiative.clone());
        Ok(initiative)
    }

    fn remove(&mut self, id: Uuid) -> bool {
        let before = self.initiatives.len();
        self.initiatives.retain(|i| i.id != id);
        let removed = self.initiatives.len() != before;
        if removed {
            tracing::debug!(%id, "Removed initiative");
        }
        removed
    }

    fn list(&self) -> Vec<Initiative> {
        self.initiatives.clone()
    }

    fn len(&self) -> usize {
        self.initiatives.len()
    }
}
