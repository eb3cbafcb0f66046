//! Terminal renditions of the map, the history list and the error banner.

use crate::domain::Position;
use crate::view::{ErrorBanner, HistoryEntry, HistoryView, MapWidget, MarkerId, TileLayer};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct ConsoleMap {
    next_marker: u64,
}

impl MapWidget for ConsoleMap {
    fn add_tile_layer(&mut self, layer: &TileLayer) {
        debug!(url = %layer.url_template, "🗺️ Tiles {}", layer.attribution);
    }

    fn set_view(&mut self, center: Position, zoom: u8) {
        info!("🗺️ Map centered at {:.4}, {:.4} (zoom {})", center.latitude, center.longitude, zoom);
    }

    fn add_marker(&mut self, position: Position, popup: &str) -> MarkerId {
        self.next_marker += 1;
        let marker = MarkerId(self.next_marker);
        debug!(%marker, "📍 Marker at {:.4}, {:.4}: {}", position.latitude, position.longitude, popup.replace('\n', " | "));
        marker
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        debug!(%marker, "📍 Marker removed");
    }

    fn open_popup(&mut self, marker: MarkerId) {
        debug!(%marker, "📍 Popup opened");
    }
}

#[derive(Debug, Default)]
pub struct ConsoleHistory;

impl HistoryView for ConsoleHistory {
    fn render(&self, entries: &[HistoryEntry]) {
        info!("📜 Location history ({} entries)", entries.len());
        for entry in entries {
            info!(
                "   {} | {} | {} | {}, {}, {} {}",
                entry.timestamp, entry.coordinates, entry.full_address, entry.city, entry.province, entry.country, entry.postcode
            );
        }
    }
}

#[derive(Debug, Default)]
pub struct ConsoleBanner;

impl ErrorBanner for ConsoleBanner {
    fn show(&self, message: &str) {
        warn!("🚨 {}", message);
    }

    fn hide(&self) {
        debug!("🔕 Error banner cleared");
    }
}
