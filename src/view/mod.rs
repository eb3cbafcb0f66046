mod error_banner;
mod history_view;
mod map_view;
mod map_widget;

pub use error_banner::ErrorBanner;
pub use history_view::{HistoryEntry, HistoryView};
pub use map_view::MapViewAdapter;
pub use map_widget::{MapWidget, MarkerId, TileLayer};
