use crate::domain::{Address, Position};
use crate::view::map_widget::{MapWidget, MarkerId, TileLayer};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, instrument};

#[derive(Debug)]
struct MapState {
    widget: Box<dyn MapWidget>,
    marker: Option<MarkerId>,
    initialized: bool,
}

/// Keeps the map widget showing at most one marker: the last successfully saved position.
#[derive(Debug)]
pub struct MapViewAdapter {
    state: Mutex<MapState>,
    tile_layer: TileLayer,
    marker_zoom: u8,
}

impl MapViewAdapter {
    pub fn new(widget: Box<dyn MapWidget>, tile_layer: TileLayer, marker_zoom: u8) -> Self {
        MapViewAdapter {
            state: Mutex::new(MapState {
                widget,
                marker: None,
                initialized: false,
            }),
            tile_layer,
            marker_zoom,
        }
    }

    #[instrument(skip(self))]
    pub fn init(&self, default_center: Position, default_zoom: u8) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.initialized {
            debug!("🗺️ Map already initialized");
            return;
        }

        state.widget.set_view(default_center, default_zoom);
        state.widget.add_tile_layer(&self.tile_layer);
        state.initialized = true;
        info!("🗺️ Initialized map at {:.4}, {:.4}", default_center.latitude, default_center.longitude);
    }

    #[instrument(skip(self, address))]
    pub fn set_marker(&self, latitude: f64, longitude: f64, address: &Address) -> MarkerId {
        let position = Position::new(latitude, longitude);
        let popup = popup_text(position, address);

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = state.marker.take() {
            state.widget.remove_marker(previous);
        }

        let marker = state.widget.add_marker(position, &popup);
        state.widget.open_popup(marker);
        state.widget.set_view(position, self.marker_zoom);
        state.marker = Some(marker);

        debug!(%marker, "📍 Placed marker");
        marker
    }

    pub fn marker(&self) -> Option<MarkerId> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).marker
    }
}

pub fn popup_text(position: Position, address: &Address) -> String {
    format!(
        "Lat: {:.4}, Lon: {:.4}\nAddress: {}",
        position.latitude,
        position.longitude,
        address.display_full_address()
    )
}
