//! Risk estimator contract and static implementation.

use parking_lot::Mutex;

use resguard_core::{DomainEvent, Result};

/// Contract the guardian consumes from a risk-trajectory subsystem.
///
/// The estimator accumulates whatever history it wants from absorbed
/// events; the guardian itself keeps no trend state.
pub trait RiskEstimator: Send + Sync {
    /// Absorb one domain event. Fire-and-forget; no value comes back.
    fn absorb_event(&self, event: &DomainEvent) -> Result<()>;

    /// Long-horizon risk index reflecting accumulated history.
    fn risk_trajectory(&self) -> Result<f64>;
}

/// Deterministic estimator returning a fixed risk index.
///
/// Records every absorbed event so tests can observe the guardian's
/// absorb calls in order.
pub struct StaticRiskEstimator {
    index: f64,
    absorbed: Mutex<Vec<DomainEvent>>,
}

impl StaticRiskEstimator {
    pub fn new(index: f64) -> Self {
        Self {
            index,
            absorbed: Mutex::new(Vec::new()),
        }
    }

    /// Number of events absorbed so far.
    pub fn absorbed_count(&self) -> usize {
        self.absorbed.lock().len()
    }

    /// Snapshot of the absorbed events in arrival order.
    pub fn absorbed_events(&self) -> Vec<DomainEvent> {
        self.absorbed.lock().clone()
    }
}

impl RiskEstimator for StaticRiskEstimator {
    fn absorb_event(&self, event: &DomainEvent) -> Result<()> {
        self.absorbed.lock().push(event.clone());
        Ok(())
    }

    fn risk_trajectory(&self) -> Result<f64> {
        Ok(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resguard_core::Domain;

    fn power_event(severity: f64) -> DomainEvent {
        DomainEvent::Power {
            current_load_kw: 42.0,
            severity,
            result: "stabilized".to_string(),
            action_taken: "shed_or_throttle".to_string(),
        }
    }

    #[test]
    fn test_returns_fixed_index() {
        let estimator = StaticRiskEstimator::new(0.35);
        assert_eq!(estimator.risk_trajectory().unwrap(), 0.35);

        estimator.absorb_event(&power_event(0.9)).unwrap();
        assert_eq!(estimator.risk_trajectory().unwrap(), 0.35);
    }

    #[test]
    fn test_records_absorbed_events_in_order() {
        let estimator = StaticRiskEstimator::new(0.0);
        estimator.absorb_event(&power_event(0.2)).unwrap();
        estimator.absorb_event(&power_event(0.8)).unwrap();

        assert_eq!(estimator.absorbed_count(), 2);
        let events = estimator.absorbed_events();
        assert_eq!(events[0].severity(), 0.2);
        assert_eq!(events[1].severity(), 0.8);
        assert_eq!(events[1].domain(), Domain::Power);
    }
}
