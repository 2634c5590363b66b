//! Resguard Control — thermal and power controller contracts, static sources, profiles.
//!
//! The real control algorithms live in external subsystems. This crate
//! defines the narrow contracts the guardian consumes (`ThermalSource`,
//! `PowerSource`) plus deterministic static implementations wired from
//! named configuration profiles.

pub mod power;
pub mod profiles;
pub mod thermal;

pub use power::{PowerDecision, PowerSource, StaticPowerSource};
pub use profiles::{PowerProfile, Preset, ThermalProfile};
pub use thermal::{StaticThermalSource, ThermalDecision, ThermalSource};
