//! A prioritization session: one initiative store plus one weight vector.
//!
//! Rankings are derived on every read from the current store contents and
//! weights, so any add, remove or reweight is visible on the next
//! [`Prioritizer::get_ranked`] call. The session assumes a single writer;
//! multi-threaded hosts should hold it behind one mutex.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{CreateInitiativeInput, Factor, Initiative, RankedInitiative, WeightVector};
use crate::ranking;
use crate::store::{InitiativeRepository, MemoryStore};

/// Snapshot of the session state reported by the diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigReport {
    pub storage_mode: String,
    pub data_count: usize,
    pub weights: WeightVector,
}

#[derive(Debug, Clone, Default)]
pub struct Prioritizer<R = MemoryStore> {
    repository: R,
    weights: WeightVector,
}

impl Prioritizer<MemoryStore> {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty in-memory session starting from the given weights.
    pub fn with_weights(weights: WeightVector) -> Self {
        Self::with_repository(MemoryStore::new(), weights)
    }
}

impl<R: InitiativeRepository> Prioritizer<R> {
    pub fn with_repository(repository: R, weights: WeightVector) -> Self {
        Self {
            repository,
            weights,
        }
    }

    pub fn add_initiative(&mut self, input: CreateInitiativeInput) -> Result<Initiative> {
        self.repository.add(input).inspect_err(|e| {
            tracing::warn!("Rejected initiative: {}", e);
        })
    }

    /// Remove an initiative. Unknown ids are ignored.
    pub fn remove_initiative(&mut self, id: Uuid) -> bool {
        self.repository.remove(id)
    }

    pub fn set_weight(&mut self, factor: Factor, value: u8) -> Result<()> {
        self.weights.set(factor, value)?;
        tracing::debug!(%factor, value, "Updated weight");
        Ok(())
    }

    /// Replace every weight at once; rejected vectors leave the old one in place.
    pub fn set_weights(&mut self, weights: WeightVector) -> Result<()> {
        weights.validate()?;
        self.weights = weights;
        tracing::debug!(?weights, "Replaced weights");
        Ok(())
    }

    pub fn weights(&self) -> WeightVector {
        self.weights
    }

    /// Initiatives in insertion order, without derived values.
    pub fn initiatives(&self) -> Vec<Initiative> {
        self.repository.list()
    }

    pub fn get_ranked(&self) -> Vec<RankedInitiative> {
        ranking::rank(&self.repository.list(), &self.weights)
    }

    pub fn config_report(&self) -> ConfigReport {
        ConfigReport {
            storage_mode: self.repository.storage_mode().to_string(),
            data_count: self.repository.len(),
            weights: self.weights,
        }
    }
}
