use crate::api::LocationApi;
use crate::app_config::AppConfig;
use crate::domain::{Position, TrackerError};
use crate::history::HistoryRenderer;
use crate::notifier::ErrorNotifier;
use crate::sensor::PositionSource;
use crate::submitter::LocationSubmitter;
use crate::tracking::{TrackingController, TrackingState};
use crate::view::{ErrorBanner, HistoryView, MapViewAdapter, MapWidget, TileLayer};
use std::sync::Arc;
use tracing::{info, instrument};

/// Everything the session needs from the outside world.
#[derive(Debug)]
pub struct Capabilities {
    pub api: Arc<dyn LocationApi>,
    pub source: Arc<dyn PositionSource>,
    pub map_widget: Box<dyn MapWidget>,
    pub history_view: Arc<dyn HistoryView>,
    pub banner: Arc<dyn ErrorBanner>,
}

#[derive(Debug)]
pub struct Session {
    default_center: Position,
    default_zoom: u8,
    map: Arc<MapViewAdapter>,
    history: Arc<HistoryRenderer>,
    tracking: TrackingController,
}

impl Session {
    pub fn new(config: &AppConfig, capabilities: Capabilities) -> Self {
        let notifier = ErrorNotifier::new(capabilities.banner, config.notifier().display());

        let tile_layer = TileLayer {
            url_template: config.map().tile_url().to_string(),
            attribution: config.map().attribution().to_string(),
        };
        let map = Arc::new(MapViewAdapter::new(capabilities.map_widget, tile_layer, config.map().marker_zoom()));
        let history = Arc::new(HistoryRenderer::new(capabilities.api.clone(), capabilities.history_view, notifier.clone()));
        let submitter = Arc::new(LocationSubmitter::new(capabilities.api, map.clone(), history.clone(), notifier.clone()));
        let tracking = TrackingController::new(capabilities.source, submitter, notifier, config.tracking().watch_options());

        Session {
            default_center: config.map().default_center(),
            default_zoom: config.map().default_zoom(),
            map,
            history,
            tracking,
        }
    }

    /// Sets up the map and shows the stored history. A failing history load has already been
    /// reported to the user and does not prevent tracking.
    #[instrument(skip(self))]
    pub async fn init(&self) -> Result<(), TrackerError> {
        self.map.init(self.default_center, self.default_zoom);
        self.history.refresh().await?;
        info!("✅  Session ready");
        Ok(())
    }

    pub fn start_tracking(&mut self) -> Result<(), TrackerError> {
        self.tracking.start()
    }

    pub fn stop_tracking(&mut self) {
        self.tracking.stop()
    }

    pub async fn refresh_history(&self) -> Result<usize, TrackerError> {
        self.history.refresh().await
    }

    pub fn tracking_state(&self) -> TrackingState {
        self.tracking.state()
    }
}
