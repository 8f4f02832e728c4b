//! Weather client error types.

use agrovista_core::error::AgroError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("network error: {0}")]
    Network(String),

    #[error("weather provider returned HTTP {0}")]
    Status(u16),

    #[error("malformed weather response: {0}")]
    Malformed(String),
}

impl From<WeatherError> for AgroError {
    // All causes collapse to the one user-visible outcome; the
    // detailed kind stays within this crate and the logs.
    fn from(_: WeatherError) -> Self {
        AgroError::WeatherUnavailable
    }
}
