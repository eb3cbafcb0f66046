use crate::domain::Position;
use crate::sensor::position_source::{PositionSource, PositionStream, SensorError, WatchOptions};
use futures::StreamExt;
use futures::stream;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};
use thiserror::Error;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;
use tracing::{debug, info, instrument};

/// Plays back a recorded track, one fix per interval, starting over at the end of the track.
#[derive(Debug)]
pub struct ReplaySource {
    track: Vec<Position>,
    interval: Duration,
}

impl ReplaySource {
    pub fn new(track: Vec<Position>, interval: Duration) -> Result<Self, ReplayError> {
        if track.is_empty() {
            return Err(ReplayError::EmptyTrack);
        }

        if interval.is_zero() {
            return Err(ReplayError::ZeroInterval);
        }

        Ok(ReplaySource { track, interval })
    }

    #[instrument]
    pub fn load(path: &Path, interval: Duration) -> Result<Self, ReplayError> {
        let content = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let track: Vec<Position> = serde_json::from_str(&content)?;

        info!("🛰️ Loaded track with {} position(s)", track.len());
        ReplaySource::new(track, interval)
    }
}

impl PositionSource for ReplaySource {
    fn is_available(&self) -> bool {
        true
    }

    fn watch(&self, options: WatchOptions) -> Result<PositionStream, SensorError> {
        // A replayed track has no accuracy modes and never caches a fix
        debug!(high_accuracy = options.high_accuracy, "🛰️ Replaying {} position(s) every {:?}", self.track.len(), self.interval);

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let positions = stream::iter(self.track.clone().into_iter().cycle());
        Ok(IntervalStream::new(interval).zip(positions).map(|(_, position)| Ok(position)).boxed())
    }
}

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("unable to read track '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid track: {0}")]
    Json(#[from] serde_json::Error),
    #[error("track contains no positions")]
    EmptyTrack,
    #[error("replay interval must be greater than zero")]
    ZeroInterval,
}
