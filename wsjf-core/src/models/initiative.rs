use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Factor, JobSize, Score};
use crate::error::{Result, WsjfError};

/// A candidate unit of work competing for priority.
///
/// Initiatives are immutable once created: there is no edit operation, only
/// add and remove. `created_at` is informational and plays no part in ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Initiative {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub uv: Score,
    pub tc: Score,
    pub rr: Score,
    pub cr: Score,
    pub job_size: JobSize,
}

impl Initiative {
    /// Validate a draft and stamp it with a fresh id and creation time.
    pub fn create(input: CreateInitiativeInput) -> Result<Self> {
        if input.name.trim().is_empty() {
            return Err(WsjfError::InvalidName);
        }

        let score = |factor: Factor, value: u8| {
            Score::try_from(value).map_err(|_| WsjfError::InvalidScore { factor, value })
        };

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            uv: score(Factor::Uv, input.uv)?,
            tc: score(Factor::Tc, input.tc)?,
            rr: score(Factor::Rr, input.rr)?,
            cr: score(Factor::Cr, input.cr)?,
            job_size: JobSize::try_from(input.job_size)
                .map_err(|_| WsjfError::InvalidJobSize(input.job_size))?,
            name: input.name,
        })
    }

    pub fn score(&self, factor: Factor) -> Score {
        match factor {
            Factor::Uv => self.uv,
            Factor::Tc => self.tc,
            Factor::Rr => self.rr,
            Factor::Cr => self.cr,
        }
    }
}

/// Input for creating a new initiative.
///
/// Fields are raw numbers; they are checked against their scales when the
/// initiative is created. Omitted fields take the form defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CreateInitiativeInput {
    pub name: String,
    pub uv: u8,
    pub tc: u8,
    pub rr: u8,
    pub cr: u8,
    pub job_size: u32,
}

impl CreateInitiativeInput {
    /// A draft with the given name and default scores.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_scores(mut self, uv: u8, tc: u8, rr: u8, cr: u8) -> Self {
        self.uv = uv;
        self.tc = tc;
        self.rr = rr;
        self.cr = cr;
        self
    }

    pub fn with_job_size(mut self, job_size: u32) -> Self {
        self.job_size = job_size;
        self
    }
}

impl Default for CreateInitiativeInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            uv: 3,
            tc: 3,
            rr: 3,
            cr: 1,
            job_size: 8,
        }
    }
}
