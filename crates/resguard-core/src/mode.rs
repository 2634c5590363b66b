//! Global operating mode resolved once per cycle.

use serde::{Deserialize, Serialize};

/// Resolved operating posture for the managed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardianMode {
    /// Both subsystems report nominal conditions.
    Normal,
    /// A subsystem asked for load shedding without raising an emergency.
    Preventive,
    /// At least one subsystem raised its emergency flag.
    Emergency,
}

impl std::fmt::Display for GuardianMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Preventive => write!(f, "preventive"),
            Self::Emergency => write!(f, "emergency"),
        }
    }
}
