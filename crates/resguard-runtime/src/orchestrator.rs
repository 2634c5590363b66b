//! Resource guardian — executes one control cycle per tick.

use std::sync::Arc;

use tracing::{debug, info};

use resguard_control::{PowerSource, ThermalSource};
use resguard_core::{DomainEvent, GuardianMode, Result};
use resguard_risk::RiskEstimator;

use crate::policy::{determine_guardian_mode, summarize_risk};
use crate::severity::{power_severity, thermal_severity};
use crate::state::{ResourceState, TickContext, TickSnapshot};

/// Fuses thermal, power, and risk-trajectory signals into one operating
/// decision per cycle.
///
/// The guardian keeps no numeric history of its own; anything temporal
/// lives inside the risk estimator. `tick` runs to completion with no
/// internal locking, so calling it concurrently on one instance is only
/// safe when all three collaborators are themselves thread-safe. That
/// is a caller obligation; the expected usage is a single scheduler
/// thread invoking ticks at a fixed period.
pub struct ResourceGuardian {
    thermal: Arc<dyn ThermalSource>,
    power: Arc<dyn PowerSource>,
    risk: Arc<dyn RiskEstimator>,
}

impl ResourceGuardian {
    pub fn new(
        thermal: Arc<dyn ThermalSource>,
        power: Arc<dyn PowerSource>,
        risk: Arc<dyn RiskEstimator>,
    ) -> Self {
        info!(
            "Resource guardian initialized: target={}°C, max_safe={}°C, capacity={}kW",
            thermal.target_temp(),
            thermal.max_safe_temp(),
            power.max_capacity_kw()
        );
        Self {
            thermal,
            power,
            risk,
        }
    }

    fn build_thermal_event(
        &self,
        current_temp: f64,
        ambient_temp: f64,
        workload_level: f64,
    ) -> DomainEvent {
        let severity = thermal_severity(
            current_temp,
            self.thermal.target_temp(),
            self.thermal.max_safe_temp(),
            ambient_temp,
        );
        DomainEvent::Thermal {
            temperature: current_temp,
            severity,
            result: "stabilized".to_string(),
            action_taken: "cooling_adjusted".to_string(),
            ambient_temp,
            workload_level,
        }
    }

    fn build_power_event(&self, current_load_kw: f64) -> DomainEvent {
        let severity = power_severity(
            current_load_kw,
            self.power.max_capacity_kw(),
            self.power.safety_margin(),
        );
        DomainEvent::Power {
            current_load_kw,
            severity,
            result: "stabilized".to_string(),
            action_taken: "shed_or_throttle".to_string(),
        }
    }

    /// Run one guardian cycle over a snapshot of physical readings.
    ///
    /// Readings are trusted as-is; no range validation happens here. The
    /// optional context is echoed back unmodified for caller bookkeeping.
    /// Any collaborator failure aborts the cycle: the caller gets either
    /// a fully populated snapshot or an error, never a partial result.
    pub fn tick(
        &self,
        current_temp: f64,
        current_load_kw: f64,
        ambient_temp: f64,
        workload_level: f64,
        context: Option<TickContext>,
    ) -> Result<TickSnapshot> {
        let context = context.unwrap_or_default();

        let thermal_decision = self.thermal.control_action(current_temp)?;
        let power_decision = self.power.power_action(current_load_kw)?;

        let thermal_event = self.build_thermal_event(current_temp, ambient_temp, workload_level);
        let power_event = self.build_power_event(current_load_kw);

        // Both events reach the estimator before the trajectory is read.
        self.risk.absorb_event(&thermal_event)?;
        self.risk.absorb_event(&power_event)?;
        let risk_index = self.risk.risk_trajectory()?;

        let combined_risk = summarize_risk(thermal_event.severity(), power_event.severity());
        let mode = determine_guardian_mode(&thermal_decision, &power_decision);

        debug!(
            "Tick: temp={:.2}°C load={:.2}kW thermal_sev={:.3} power_sev={:.3} \
             combined={:.3} mode={}",
            current_temp,
            current_load_kw,
            thermal_event.severity(),
            power_event.severity(),
            combined_risk,
            mode
        );
        if mode != GuardianMode::Normal {
            info!(
                "Guardian mode {}: thermal_emergency={} power_emergency={} shed={}",
                mode,
                thermal_decision.emergency,
                power_decision.emergency,
                power_decision.shed_non_critical
            );
        }

        let state = ResourceState {
            temperature: current_temp,
            power_load_kw: current_load_kw,
            ambient_temp,
            workload_level,
            thermal_decision,
            power_decision,
            risk_index,
            mode,
        };

        Ok(TickSnapshot::from_state(&state, combined_risk, context))
    }
}
