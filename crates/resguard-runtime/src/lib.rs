//! Resguard Runtime — guardian orchestrator, severity estimators, mode policy.
//!
//! `ResourceGuardian::tick` runs one control cycle: it drives the thermal
//! and power collaborators, derives severity-weighted events for the risk
//! estimator, and resolves a global operating mode into one snapshot.

pub mod orchestrator;
pub mod policy;
pub mod severity;
pub mod state;

pub use orchestrator::ResourceGuardian;
pub use policy::{determine_guardian_mode, summarize_risk};
pub use severity::{power_severity, thermal_severity};
pub use state::{ResourceState, TickContext, TickSnapshot};
