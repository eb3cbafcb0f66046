use crate::api::LocationApi;
use crate::domain::TrackerError;
use crate::notifier::ErrorNotifier;
use crate::view::{HistoryEntry, HistoryView};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const FETCH_FAILED: &str = "Failed to fetch locations";

#[derive(Debug)]
pub struct HistoryRenderer {
    api: Arc<dyn LocationApi>,
    view: Arc<dyn HistoryView>,
    notifier: ErrorNotifier,
}

impl HistoryRenderer {
    pub fn new(api: Arc<dyn LocationApi>, view: Arc<dyn HistoryView>, notifier: ErrorNotifier) -> Self {
        HistoryRenderer { api, view, notifier }
    }

    /// Fetches the stored locations and replaces the rendered list with them, in server order.
    /// On failure the list on screen is left alone.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<usize, TrackerError> {
        info!("📜 Retrieving location history...");

        let records = match self.api.locations().await {
            Ok(records) => records,
            Err(e) => {
                warn!("⚠️ Retrieving location history... failed: {}", e);
                self.notifier.show(FETCH_FAILED);
                return Err(e.into());
            }
        };

        let entries = records.iter().map(HistoryEntry::from).collect::<Vec<_>>();
        self.view.render(&entries);

        info!("📜 Retrieving location history... OK, {} found", entries.len());
        Ok(entries.len())
    }
}
