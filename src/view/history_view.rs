use crate::domain::{LocationRecord, UNKNOWN};
use std::fmt::Debug;

/// One rendered row of the location history, placeholders already substituted.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub coordinates: String,
    pub timestamp: String,
    pub full_address: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub postcode: String,
}

impl From<&LocationRecord> for HistoryEntry {
    fn from(record: &LocationRecord) -> Self {
        let address = record.address.clone().unwrap_or_default();

        HistoryEntry {
            coordinates: format!("{:.4}, {:.4}", record.latitude, record.longitude),
            timestamp: record.timestamp.map(|timestamp| timestamp.to_string()).unwrap_or_else(|| UNKNOWN.to_string()),
            full_address: address.display_full_address().to_string(),
            city: address.display_city().to_string(),
            province: address.display_province().to_string(),
            country: address.display_country().to_string(),
            postcode: address.display_postcode().to_string(),
        }
    }
}

/// The list showing previously saved locations.
pub trait HistoryView: Debug + Send + Sync {
    /// Replaces everything currently shown with `entries`.
    fn render(&self, entries: &[HistoryEntry]);
}
