//! Resguard Core — shared vocabulary: errors, guardian mode, domain events.

pub mod error;
pub mod event;
pub mod mode;

pub use error::{Error, Result};
pub use event::{Domain, DomainEvent};
pub use mode::GuardianMode;
