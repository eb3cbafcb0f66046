use crate::api::{LocationApi, SaveResponse};
use crate::domain::{Address, Position, TrackerError};
use crate::history::HistoryRenderer;
use crate::notifier::ErrorNotifier;
use crate::view::MapViewAdapter;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const SAVE_FAILED: &str = "Failed to save location";

/// Sends positions to the location server and updates the map and history once the server has
/// accepted them.
#[derive(Debug)]
pub struct LocationSubmitter {
    api: Arc<dyn LocationApi>,
    map: Arc<MapViewAdapter>,
    history: Arc<HistoryRenderer>,
    notifier: ErrorNotifier,
}

impl LocationSubmitter {
    pub fn new(api: Arc<dyn LocationApi>, map: Arc<MapViewAdapter>, history: Arc<HistoryRenderer>, notifier: ErrorNotifier) -> Self {
        LocationSubmitter {
            api,
            map,
            history,
            notifier,
        }
    }

    /// Every call issues its own request. Nothing orders the completion of overlapping
    /// submissions, the marker ends up at whichever accepted position completes last.
    #[instrument(skip(self), fields(latitude = position.latitude, longitude = position.longitude))]
    pub async fn submit(&self, position: Position) -> Result<Address, TrackerError> {
        info!("📤 Saving location...");

        let response = match self.api.save_location(position).await {
            Ok(response) => response,
            Err(e) => {
                warn!("⚠️ Saving location... failed: {}", e);
                self.notifier.show(SAVE_FAILED);
                return Err(e.into());
            }
        };

        match response {
            SaveResponse::Saved { address, id, message } => {
                info!(
                    id = id.as_deref().unwrap_or("-"),
                    message = message.as_deref().unwrap_or("-"),
                    "📤 Saving location... OK, {}",
                    address.display_full_address()
                );
                self.map.set_marker(position.latitude, position.longitude, &address);
                // Failures are reported by the renderer itself
                let _ = self.history.refresh().await;
                Ok(address)
            }
            SaveResponse::Rejected { message } => {
                let message = message.unwrap_or_else(|| SAVE_FAILED.to_string());
                warn!("⚠️ Saving location... rejected: {}", message);
                self.notifier.show(&message);
                Err(TrackerError::Application(message))
            }
        }
    }
}
