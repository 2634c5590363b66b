//! Resguard Risk — risk-trajectory estimator contract and static estimator.
//!
//! The estimator's internal model is owned by an external subsystem; the
//! guardian only feeds it per-cycle events and reads back one scalar.

pub mod estimator;

pub use estimator::{RiskEstimator, StaticRiskEstimator};
