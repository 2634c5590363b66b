//! Mode policy and risk summarizer — pure functions over cycle results.

use resguard_control::{PowerDecision, ThermalDecision};
use resguard_core::GuardianMode;

/// Weight of thermal severity in the combined risk scalar.
pub const THERMAL_RISK_WEIGHT: f64 = 0.6;
/// Weight of power severity in the combined risk scalar.
pub const POWER_RISK_WEIGHT: f64 = 0.4;

/// Combine the two per-cycle severities into one [0,1] scalar.
///
/// Thermal risk is the primary driver; the weights are fixed design
/// constants, not configuration.
pub fn summarize_risk(thermal_severity: f64, power_severity: f64) -> f64 {
    (THERMAL_RISK_WEIGHT * thermal_severity + POWER_RISK_WEIGHT * power_severity).clamp(0.0, 1.0)
}

/// Resolve the global operating mode from the two controller decisions.
///
/// Only the decision flags matter here; severities never influence mode.
pub fn determine_guardian_mode(
    thermal_decision: &ThermalDecision,
    power_decision: &PowerDecision,
) -> GuardianMode {
    if thermal_decision.emergency || power_decision.emergency {
        return GuardianMode::Emergency;
    }

    // The thermal re-check below is unreachable: a true thermal emergency
    // already resolved to Emergency above. Kept to mirror the rule table
    // as deployed.
    // TODO: decide whether a power-only emergency should ever downgrade
    // below Emergency, then collapse this clause to the shed flag alone.
    if thermal_decision.emergency || power_decision.shed_non_critical {
        return GuardianMode::Preventive;
    }

    GuardianMode::Normal
}
