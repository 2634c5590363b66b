//! Resource state and output snapshot for one guardian cycle.

use serde::{Deserialize, Serialize};

use resguard_control::{PowerDecision, ThermalDecision};
use resguard_core::GuardianMode;

/// Caller-supplied bookkeeping echoed back untouched in the snapshot.
///
/// The guardian never inspects or mutates it.
pub type TickContext = serde_json::Map<String, serde_json::Value>;

/// Authoritative snapshot of resource conditions for one cycle.
///
/// Built fresh each tick and never mutated afterward; the guardian keeps
/// no state between cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    pub temperature: f64,
    pub power_load_kw: f64,
    pub ambient_temp: f64,
    pub workload_level: f64,
    pub thermal_decision: ThermalDecision,
    pub power_decision: PowerDecision,
    pub risk_index: f64,
    pub mode: GuardianMode,
}

/// Output of one guardian tick, ready for logging or a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub mode: GuardianMode,
    pub temperature: f64,
    pub power_load_kw: f64,
    pub thermal_decision: ThermalDecision,
    pub power_decision: PowerDecision,
    pub risk_index: f64,
    pub combined_risk: f64,
    pub context: TickContext,
}

impl TickSnapshot {
    /// Project a resource state into the output schema.
    ///
    /// Ambient temperature and workload level stay internal to the state;
    /// the snapshot adds the combined risk and the caller context.
    pub fn from_state(state: &ResourceState, combined_risk: f64, context: TickContext) -> Self {
        Self {
            mode: state.mode,
            temperature: state.temperature,
            power_load_kw: state.power_load_kw,
            thermal_decision: state.thermal_decision,
            power_decision: state.power_decision,
            risk_index: state.risk_index,
            combined_risk,
            context,
        }
    }
}
