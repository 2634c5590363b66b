//! Thermal controller contract and static source.

use serde::{Deserialize, Serialize};
use tracing::warn;

use resguard_core::Result;

use crate::profiles::ThermalProfile;

/// Outcome of one thermal control action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalDecision {
    /// Requested cooling intensity (controller-defined scale).
    pub cooling_level: f64,
    /// True when the controller considers the temperature unrecoverable
    /// without global intervention.
    pub emergency: bool,
}

/// Contract the guardian consumes from a thermal control subsystem.
///
/// Implementations own their control algorithm; the guardian only asks
/// for one action per cycle and reads the configured temperature range.
pub trait ThermalSource: Send + Sync {
    /// Compute the control action for the current temperature.
    fn control_action(&self, current_temp: f64) -> Result<ThermalDecision>;

    /// Temperature the controller steers toward (°C).
    fn target_temp(&self) -> f64;

    /// Upper bound of the safe operating range (°C), above the target.
    fn max_safe_temp(&self) -> f64;
}

/// Deterministic thermal source returning a fixed decision every cycle.
///
/// Stands in for a real controller in tests and compositions where the
/// control algorithm itself is out of scope.
pub struct StaticThermalSource {
    profile: ThermalProfile,
    decision: ThermalDecision,
}

impl StaticThermalSource {
    /// Source that always reports a benign decision.
    pub fn new(profile: ThermalProfile) -> Self {
        Self::with_decision(
            profile,
            ThermalDecision {
                cooling_level: 0.0,
                emergency: false,
            },
        )
    }

    /// Source that always reports the given decision.
    pub fn with_decision(profile: ThermalProfile, decision: ThermalDecision) -> Self {
        if profile.target_temp >= profile.max_safe_temp {
            warn!(
                "Degenerate thermal profile: target {} >= max safe {}",
                profile.target_temp, profile.max_safe_temp
            );
        }
        Self { profile, decision }
    }
}

impl ThermalSource for StaticThermalSource {
    fn control_action(&self, _current_temp: f64) -> Result<ThermalDecision> {
        Ok(self.decision)
    }

    fn target_temp(&self) -> f64 {
        self.profile.target_temp
    }

    fn max_safe_temp(&self) -> f64 {
        self.profile.max_safe_temp
    }
}
