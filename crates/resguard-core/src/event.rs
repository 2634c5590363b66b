//! Per-cycle domain events handed to the risk estimator.

use serde::{Deserialize, Serialize};

/// Subsystem a [`DomainEvent`] originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Thermal,
    Power,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Thermal => write!(f, "thermal"),
            Self::Power => write!(f, "power"),
        }
    }
}

/// One subsystem's assessed condition for a single cycle.
///
/// Events are built by the orchestrator, absorbed by the risk estimator,
/// and discarded; nothing retains them across ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "domain", rename_all = "lowercase")]
pub enum DomainEvent {
    Thermal {
        temperature: f64,
        severity: f64,
        result: String,
        action_taken: String,
        ambient_temp: f64,
        workload_level: f64,
    },
    Power {
        current_load_kw: f64,
        severity: f64,
        result: String,
        action_taken: String,
    },
}

impl DomainEvent {
    pub fn domain(&self) -> Domain {
        match self {
            Self::Thermal { .. } => Domain::Thermal,
            Self::Power { .. } => Domain::Power,
        }
    }

    pub fn severity(&self) -> f64 {
        match self {
            Self::Thermal { severity, .. } | Self::Power { severity, .. } => *severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thermal_event() -> DomainEvent {
        DomainEvent::Thermal {
            temperature: 72.5,
            severity: 0.4,
            result: "stabilized".to_string(),
            action_taken: "cooling_adjusted".to_string(),
            ambient_temp: 27.0,
            workload_level: 0.6,
        }
    }

    #[test]
    fn test_thermal_event_wire_shape() {
        let value = serde_json::to_value(thermal_event()).unwrap();
        assert_eq!(value["domain"], "thermal");
        assert_eq!(value["temperature"], 72.5);
        assert_eq!(value["severity"], 0.4);
        assert_eq!(value["result"], "stabilized");
        assert_eq!(value["action_taken"], "cooling_adjusted");
        assert_eq!(value["ambient_temp"], 27.0);
        assert_eq!(value["workload_level"], 0.6);
    }

    #[test]
    fn test_power_event_wire_shape() {
        let event = DomainEvent::Power {
            current_load_kw: 95.0,
            severity: 0.2,
            result: "stabilized".to_string(),
            action_taken: "shed_or_throttle".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["domain"], "power");
        assert_eq!(value["current_load_kw"], 95.0);
        assert_eq!(value["action_taken"], "shed_or_throttle");
        assert!(value.get("temperature").is_none());
    }

    #[test]
    fn test_event_accessors() {
        let event = thermal_event();
        assert_eq!(event.domain(), Domain::Thermal);
        assert_eq!(event.severity(), 0.4);
        assert_eq!(event.domain().to_string(), "thermal");
    }

    #[test]
    fn test_event_round_trips() {
        let event = thermal_event();
        let json = serde_json::to_string(&event).unwrap();
        let back: DomainEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
