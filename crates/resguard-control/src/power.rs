//! Power controller contract and static source.

use serde::{Deserialize, Serialize};
use tracing::warn;

use resguard_core::Result;

use crate::profiles::PowerProfile;

/// Outcome of one power control action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerDecision {
    /// True when the controller wants non-critical load shed.
    pub shed_non_critical: bool,
    /// Optional in the upstream contract; absent means false.
    #[serde(default)]
    pub emergency: bool,
}

/// Contract the guardian consumes from a power management subsystem.
pub trait PowerSource: Send + Sync {
    /// Compute the control action for the current load.
    fn power_action(&self, current_load_kw: f64) -> Result<PowerDecision>;

    /// Hard capacity ceiling (kW), positive.
    fn max_capacity_kw(&self) -> f64;

    /// Fraction of capacity held back as headroom, in [0, 1).
    fn safety_margin(&self) -> f64;
}

/// Deterministic power source returning a fixed decision every cycle.
pub struct StaticPowerSource {
    profile: PowerProfile,
    decision: PowerDecision,
}

impl StaticPowerSource {
    /// Source that always reports a benign decision.
    pub fn new(profile: PowerProfile) -> Self {
        Self::with_decision(
            profile,
            PowerDecision {
                shed_non_critical: false,
                emergency: false,
            },
        )
    }

    /// Source that always reports the given decision.
    pub fn with_decision(profile: PowerProfile, decision: PowerDecision) -> Self {
        if profile.max_capacity_kw <= 0.0 {
            warn!(
                "Degenerate power profile: max capacity {} kW",
                profile.max_capacity_kw
            );
        }
        Self { profile, decision }
    }
}

impl PowerSource for StaticPowerSource {
    fn power_action(&self, _current_load_kw: f64) -> Result<PowerDecision> {
        Ok(self.decision)
    }

    fn max_capacity_kw(&self) -> f64 {
        self.profile.max_capacity_kw
    }

    fn safety_margin(&self) -> f64 {
        self.profile.safety_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Preset;

    #[test]
    fn test_static_source_returns_configured_decision() {
        let source = StaticPowerSource::with_decision(
            PowerProfile::for_preset(Preset::Balanced),
            PowerDecision {
                shed_non_critical: true,
                emergency: false,
            },
        );
        let decision = source.power_action(95.0).unwrap();
        assert!(decision.shed_non_critical);
        assert!(!decision.emergency);
    }

    #[test]
    fn test_static_source_exposes_profile() {
        let source = StaticPowerSource::new(PowerProfile::for_preset(Preset::Conservative));
        assert_eq!(source.max_capacity_kw(), 80.0);
        assert_eq!(source.safety_margin(), 0.3);
    }

    #[test]
    fn test_decision_emergency_defaults_to_false() {
        let decision: PowerDecision =
            serde_json::from_str(r#"{"shed_non_critical": true}"#).unwrap();
        assert!(decision.shed_non_critical);
        assert!(!decision.emergency);
    }
}
