use serde::{Deserialize, Serialize};

use super::Factor;
use crate::error::{Result, WsjfError};

pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 10;

/// Relative importance of each Cost of Delay factor.
///
/// One vector applies to every initiative in a session. Each weight is an
/// integer in `MIN_WEIGHT..=MAX_WEIGHT`; all start at 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeightVector {
    pub uv: u8,
    pub tc: u8,
    pub rr: u8,
    pub cr: u8,
}

impl WeightVector {
    pub fn new(uv: u8, tc: u8, rr: u8, cr: u8) -> Result<Self> {
        let weights = Self { uv, tc, rr, cr };
        weights.validate()?;
        Ok(weights)
    }

    pub fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::Uv => self.uv,
            Factor::Tc => self.tc,
            Factor::Rr => self.rr,
            Factor::Cr => self.cr,
        }
    }

    /// Set one weight, leaving the vector untouched if `value` is out of range.
    pub fn set(&mut self, factor: Factor, value: u8) -> Result<()> {
        check(factor, value)?;
        let slot = match factor {
            Factor::Uv => &mut self.uv,
            Factor::Tc => &mut self.tc,
            Factor::Rr => &mut self.rr,
            Factor::Cr => &mut self.cr,
        };
        *slot = value;
        Ok(())
    }

    /// Check every weight; reports the first offending factor.
    pub fn validate(&self) -> Result<()> {
        Factor::ALL
            .iter()
            .try_for_each(|&factor| check(factor, self.get(factor)))
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            uv: 1,
            tc: 1,
            rr: 1,
            cr: 1,
        }
    }
}

fn check(factor: Factor, value: u8) -> Result<()> {
    if (MIN_WEIGHT..=MAX_WEIGHT).contains(&value) {
        Ok(())
    } else {
        Err(WsjfError::InvalidWeight { factor, value })
    }
}
