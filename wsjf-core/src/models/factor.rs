use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Score, ALLOWED_SCORES, FIBONACCI_SCORES};
use crate::error::WsjfError;

/// One of the four Cost of Delay components.
///
/// - `Uv`: User Value / Training Readiness Impact
/// - `Tc`: Time Criticality / Event Dependency
/// - `Rr`: Risk Reduction / Opportunity Enablement
/// - `Cr`: Compliance / Regulatory / SLA
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Uv,
    Tc,
    Rr,
    Cr,
}

impl Factor {
    /// All factors, in the order they enter the Cost of Delay sum.
    pub const ALL: [Factor; 4] = [Factor::Uv, Factor::Tc, Factor::Rr, Factor::Cr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uv => "uv",
            Self::Tc => "tc",
            Self::Rr => "rr",
            Self::Cr => "cr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Uv => "User Value",
            Self::Tc => "Time Criticality",
            Self::Rr => "Risk Reduction",
            Self::Cr => "Compliance",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Self::Uv => "User Value / Training Readiness Impact: How much value this delivers to the user, reducing manual effort or enabling critical training functionality.",
            Self::Tc => "Time Criticality / Event Dependency: Is there a specific deadline or event where delays would have severe consequences?",
            Self::Rr => "Risk Reduction / Opportunity Enablement: Does this reduce operational/technical risk or enable significant future opportunities?",
            Self::Cr => "Compliance / Regulatory / SLA: Is this required by law, regulation, or a Service Level Agreement?",
        }
    }

    /// What a given score means for this factor.
    pub fn meaning(&self, score: Score) -> &'static str {
        match (self, score.value()) {
            (Self::Uv, 1) => "Minor quality-of-life improvement, no direct impact on training effectiveness or time savings.",
            (Self::Uv, 3) => "Moderate reduction in manual effort, slight performance improvement, or adds minor training utility.",
            (Self::Uv, 6) => "Significant reduction in manual data entry/time spent, noticeable performance improvement, or enables important training functionality.",
            (Self::Uv, 8) => "Eliminates a major time-sink, critical performance fix, or enables a new, essential training capability.",
            (Self::Uv, _) => "Directly prevents a major training/exercise failure, ensures accurate and timely training readiness reporting, or drastically improves service member efficiency.",
            (Self::Tc, 1) => "No specific deadline or event dependency.",
            (Self::Tc, 3) => "Desired for an upcoming event, but delay is manageable.",
            (Self::Tc, 6) => "Important for a planned event; delay would cause significant inconvenience or rework.",
            (Self::Tc, 8) => "Critical for an upcoming exercise, collective, or individual training, potential for hours of delay if not delivered.",
            (Self::Tc, _) => "Absolutely critical for an imminent mission rehearsal, large-scale exercise, or individual training where failure/delay is unacceptable.",
            (Self::Rr, 1) => "No significant risk reduction or opportunity enablement.",
            (Self::Rr, 3) => "Addresses minor technical debt, enables a small future enhancement.",
            (Self::Rr, 6) => "Mitigates a moderate risk (e.g., recurring data inaccuracy issue), enables a significant future capability.",
            (Self::Rr, 8) => "Addresses a high-priority risk (e.g., widespread data inaccuracy), unlocks a critical strategic opportunity.",
            (Self::Rr, _) => "Prevents a high-impact 'development failure or delay,' fundamentally improves user adoption, or enables a new, high-value operational paradigm.",
            (Self::Cr, 1) => "No current compliance or regulatory requirement.",
            (Self::Cr, 3) => "Good to have for future compliance, but no immediate mandate.",
            (Self::Cr, 6) => "Addresses an emerging compliance need or prepares for a likely SLA.",
            (Self::Cr, 8) => "Required for an upcoming audit or to meet a critical, anticipated SLA.",
            (Self::Cr, _) => "Mandated by law, regulation, or existing critical SLA; non-compliance has severe consequences.",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Factor {
    type Err = WsjfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uv" => Ok(Self::Uv),
            "tc" => Ok(Self::Tc),
            "rr" => Ok(Self::Rr),
            "cr" => Ok(Self::Cr),
            other => Err(WsjfError::UnknownFactor(other.to_string())),
        }
    }
}

pub const JOB_SIZE_LABEL: &str = "Job Size (Story Points)";
pub const JOB_SIZE_HELP: &str = "Job Size (Story Points): The development team's estimate of the effort required, using Fibonacci sequence numbers.";

/// Meaning of one step on a factor's scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreDefinition {
    pub score: u8,
    pub meaning: String,
}

/// Descriptive metadata for one factor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorInfo {
    pub key: Factor,
    pub label: String,
    pub help: String,
    pub definitions: Vec<ScoreDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobSizeInfo {
    pub label: String,
    pub help: String,
    pub allowed: Vec<u32>,
}

/// Everything a form needs to present the scoring scales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorCatalogue {
    pub factors: Vec<FactorInfo>,
    pub job_size: JobSizeInfo,
}

impl FactorCatalogue {
    pub fn build() -> Self {
        let factors = Factor::ALL
            .iter()
            .map(|factor| FactorInfo {
                key: *factor,
                label: factor.label().to_string(),
                help: factor.help().to_string(),
                definitions: ALLOWED_SCORES
                    .iter()
                    .filter_map(|&v| Score::try_from(v).ok())
                    .map(|score| ScoreDefinition {
                        score: score.value(),
                        meaning: factor.meaning(score).to_string(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            factors,
            job_size: JobSizeInfo {
                label: JOB_SIZE_LABEL.to_string(),
                help: JOB_SIZE_HELP.to_string(),
                allowed: FIBONACCI_SCORES.to_vec(),
            },
        }
    }
}
