use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Values a factor score may take.
pub const ALLOWED_SCORES: [u8; 5] = [1, 3, 6, 8, 10];

/// Values a job size may take (story points).
pub const FIBONACCI_SCORES: [u32; 10] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89];

/// A raw value that is not a member of its discrete scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{value} is not on the {scale} scale")]
pub struct ScaleError {
    pub scale: &'static str,
    pub value: u32,
}

/// A factor score restricted to [`ALLOWED_SCORES`].
///
/// Serializes as a bare integer and rejects off-scale values on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScaleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if ALLOWED_SCORES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScaleError {
                scale: "score",
                value: u32::from(value),
            })
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Effort estimate restricted to [`FIBONACCI_SCORES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct JobSize(u32);

impl JobSize {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for JobSize {
    type Error = ScaleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if FIBONACCI_SCORES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScaleError {
                scale: "job size",
                value,
            })
        }
    }
}

impl From<JobSize> for u32 {
    fn from(size: JobSize) -> Self {
        size.0
    }
}
