//! Error types for Resguard.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Thermal controller error: {0}")]
    Thermal(String),

    #[error("Power controller error: {0}")]
    Power(String),

    #[error("Risk estimator error: {0}")]
    Risk(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
