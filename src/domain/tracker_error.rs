use crate::api::ApiError;
use crate::sensor::SensorError;
use thiserror::Error;

/// Outcome of a failed tracker operation. By the time one of these is returned the user has
/// already been notified.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("geolocation is not supported by this device")]
    CapabilityUnavailable,
    #[error("sensor error: {0}")]
    Sensor(#[from] SensorError),
    #[error("transport error: {0}")]
    Transport(#[source] ApiError),
    #[error("malformed response: {0}")]
    Parse(#[source] ApiError),
    #[error("server rejected the request: {0}")]
    Application(String),
}

impl From<ApiError> for TrackerError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Parse(_) => TrackerError::Parse(error),
            _ => TrackerError::Transport(error),
        }
    }
}
