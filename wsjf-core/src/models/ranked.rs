use serde::{Deserialize, Serialize};

use super::Initiative;

/// An initiative together with its derived priority figures.
///
/// The `initiative` fields are flattened into the JSON response, alongside
/// `cost_of_delay` and `wsjf`. Neither value is rounded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedInitiative {
    #[serde(flatten)]
    pub initiative: Initiative,
    pub cost_of_delay: u32,
    pub wsjf: f64,
}
