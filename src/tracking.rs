use crate::domain::TrackerError;
use crate::notifier::ErrorNotifier;
use crate::sensor::{self, PositionSource, PositionStream, WatchOptions};
use crate::submitter::LocationSubmitter;
use futures::StreamExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

pub const CAPABILITY_UNAVAILABLE: &str = "Geolocation is not supported by this device.";
pub const SENSOR_FALLBACK: &str = "Unable to retrieve your location.";

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingState {
    Idle,
    Watching,
}

/// Handle to a running watch. Dropping it cancels the watch, not the submissions it started.
#[derive(Debug)]
pub struct TrackingSubscription {
    id: u64,
    task: JoinHandle<()>,
}

impl TrackingSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for TrackingSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Debug)]
pub struct TrackingController {
    source: Arc<dyn PositionSource>,
    submitter: Arc<LocationSubmitter>,
    notifier: ErrorNotifier,
    options: WatchOptions,
    subscription: Option<TrackingSubscription>,
}

impl TrackingController {
    pub fn new(source: Arc<dyn PositionSource>, submitter: Arc<LocationSubmitter>, notifier: ErrorNotifier, options: WatchOptions) -> Self {
        TrackingController {
            source,
            submitter,
            notifier,
            options,
            subscription: None,
        }
    }

    pub fn state(&self) -> TrackingState {
        match self.subscription {
            Some(_) => TrackingState::Watching,
            None => TrackingState::Idle,
        }
    }

    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), TrackerError> {
        if let Some(subscription) = &self.subscription {
            debug!(subscription = subscription.id(), "🛰️ Already tracking");
            return Ok(());
        }

        if !self.source.is_available() {
            warn!("⚠️ No position sensor available");
            self.notifier.show(CAPABILITY_UNAVAILABLE);
            return Err(TrackerError::CapabilityUnavailable);
        }

        let positions = match sensor::watch(self.source.as_ref(), self.options) {
            Ok(positions) => positions,
            Err(e) => {
                warn!("⚠️ Unable to watch the position sensor: {}", e);
                self.notifier.show(e.message().unwrap_or(SENSOR_FALLBACK));
                return Err(e.into());
            }
        };

        let id = NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed);
        let task = tokio::spawn(forward_positions(id, positions, self.submitter.clone(), self.notifier.clone()));
        self.subscription = Some(TrackingSubscription { id, task });

        info!(subscription = id, options = ?self.options, "🛰️ Started tracking");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        match self.subscription.take() {
            Some(subscription) => info!(subscription = subscription.id(), "🛑 Stopped tracking"),
            None => debug!("🛑 Not tracking"),
        }
    }
}

#[instrument(skip(positions, submitter, notifier))]
async fn forward_positions(subscription: u64, mut positions: PositionStream, submitter: Arc<LocationSubmitter>, notifier: ErrorNotifier) {
    while let Some(update) = positions.next().await {
        match update {
            Ok(position) => {
                debug!(latitude = position.latitude, longitude = position.longitude, "🛰️ Received position");
                let submitter = submitter.clone();
                tokio::spawn(async move {
                    // Outcome is reported to the user by the submitter
                    let _ = submitter.submit(position).await;
                });
            }
            Err(e) => {
                warn!("⚠️ Position sensor error: {}", e);
                notifier.show(e.message().unwrap_or(SENSOR_FALLBACK));
            }
        }
    }

    info!("🛰️ Position stream ended");
}
