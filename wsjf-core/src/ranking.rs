//! Weighted Shortest Job First ranking.
//!
//! For each initiative:
//!
//! ```text
//! cost_of_delay = uv*w.uv + tc*w.tc + rr*w.rr + cr*w.cr
//! wsjf          = cost_of_delay / max(job_size, 1)
//! ```
//!
//! The result is sorted by `wsjf`, highest first. The sort is stable, so
//! initiatives with equal WSJF keep their insertion order.

use crate::models::{Factor, Initiative, RankedInitiative, WeightVector};

/// Weighted sum of the four factor scores. Not normalized.
pub fn cost_of_delay(initiative: &Initiative, weights: &WeightVector) -> u32 {
    Factor::ALL
        .iter()
        .map(|&factor| {
            u32::from(initiative.score(factor).value()) * u32::from(weights.get(factor))
        })
        .sum()
}

/// Job size used as the divisor. Never zero.
pub fn effective_job_size(job_size: u32) -> u32 {
    if job_size > 0 {
        job_size
    } else {
        1
    }
}

pub fn wsjf(cost_of_delay: u32, job_size: u32) -> f64 {
    f64::from(cost_of_delay) / f64::from(effective_job_size(job_size))
}

/// Score a single initiative against the given weights.
pub fn evaluate(initiative: &Initiative, weights: &WeightVector) -> RankedInitiative {
    let cost_of_delay = cost_of_delay(initiative, weights);
    RankedInitiative {
        wsjf: wsjf(cost_of_delay, initiative.job_size.value()),
        cost_of_delay,
        initiative: initiative.clone(),
    }
}

/// Rank initiatives by WSJF, highest first.
///
/// Pure: the inputs are not modified and the same inputs always yield the
/// same sequence.
pub fn rank(initiatives: &[Initiative], weights: &WeightVector) -> Vec<RankedInitiative> {
    let mut ranked: Vec<RankedInitiative> = initiatives
        .iter()
        .map(|initiative| evaluate(initiative, weights))
        .collect();

    ranked.sort_by(|a, b| b.wsjf.total_cmp(&a.wsjf));
    ranked
}
