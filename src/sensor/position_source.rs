use crate::domain::Position;
use futures::StreamExt;
use futures::stream::{self, BoxStream};
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

pub type PositionStream = BoxStream<'static, Result<Position, SensorError>>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    pub high_accuracy: bool,
    /// Longest wait for the next fix before the watch reports a timeout.
    pub max_wait: Duration,
    /// Oldest cached fix that may be handed out, zero means always fresh.
    pub max_cache_age: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        WatchOptions {
            high_accuracy: true,
            max_wait: Duration::from_millis(10_000),
            max_cache_age: Duration::ZERO,
        }
    }
}

/// A device sensor able to deliver a continuous stream of position fixes.
pub trait PositionSource: Debug + Send + Sync {
    fn is_available(&self) -> bool;

    fn watch(&self, options: WatchOptions) -> Result<PositionStream, SensorError>;
}

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum SensorError {
    #[error("position sensor unavailable")]
    Unavailable,
    #[error("permission denied")]
    PermissionDenied(Option<String>),
    #[error("position unavailable")]
    PositionUnavailable(Option<String>),
    #[error("timeout expired")]
    Timeout,
    #[error("{0}")]
    Source(String),
}

impl SensorError {
    /// The message reported by the sensor itself, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SensorError::PermissionDenied(message) | SensorError::PositionUnavailable(message) => message.as_deref(),
            SensorError::Timeout => Some("Timeout expired"),
            SensorError::Source(message) => Some(message.as_str()),
            SensorError::Unavailable => None,
        }
    }
}

/// Starts watching `source`, reporting [`SensorError::Timeout`] whenever no fix arrives within
/// `options.max_wait`. The watch keeps going after a timeout.
pub fn watch(source: &dyn PositionSource, options: WatchOptions) -> Result<PositionStream, SensorError> {
    let positions = source.watch(options)?;
    let max_wait = options.max_wait;

    Ok(stream::unfold(positions, move |mut positions| async move {
        match timeout(max_wait, positions.next()).await {
            Ok(Some(update)) => Some((update, positions)),
            Ok(None) => None,
            Err(_) => Some((Err(SensorError::Timeout), positions)),
        }
    })
    .boxed())
}

/// Used on hosts without any position sensor.
#[derive(Debug, Default)]
pub struct NoSensor;

impl PositionSource for NoSensor {
    fn is_available(&self) -> bool {
        false
    }

    fn watch(&self, _options: WatchOptions) -> Result<PositionStream, SensorError> {
        Err(SensorError::Unavailable)
    }
}
