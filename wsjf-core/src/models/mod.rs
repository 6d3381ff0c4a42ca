//! Domain models for WSJF prioritization.
//!
//! # Core Concepts
//!
//! - [`Initiative`]: A proposed unit of work scored on four factors plus a job size.
//!   Created from a [`CreateInitiativeInput`] draft, never edited afterwards.
//! - [`Score`] / [`JobSize`]: Values restricted to their discrete scales.
//! - [`WeightVector`]: Session-wide importance of each [`Factor`].
//! - [`RankedInitiative`]: An initiative with its derived Cost of Delay and WSJF.
//!   Derived values are recomputed on every read and never stored.

mod factor;
mod initiative;
mod ranked;
mod scale;
mod weights;

pub use factor::*;
pub use initiative::*;
pub use ranked::*;
pub use scale::*;
pub use weights::*;
