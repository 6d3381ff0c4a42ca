use thiserror::Error;

use crate::models::Factor;

/// Rejections raised by the initiative store and the weight vector.
///
/// A rejected operation never changes state: the store and weights are
/// exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WsjfError {
    #[error("Initiative name must not be empty")]
    InvalidName,

    #[error("Invalid {factor} score {value}: must be one of 1, 3, 6, 8, 10")]
    InvalidScore { factor: Factor, value: u8 },

    #[error("Invalid job size {0}: must be one of 1, 2, 3, 5, 8, 13, 21, 34, 55, 89")]
    InvalidJobSize(u32),

    #[error("Invalid {factor} weight {value}: must be between 1 and 10")]
    InvalidWeight { factor: Factor, value: u8 },

    #[error("Unknown factor '{0}': expected one of uv, tc, rr, cr")]
    UnknownFactor(String),
}

pub type Result<T> = std::result::Result<T, WsjfError>;
