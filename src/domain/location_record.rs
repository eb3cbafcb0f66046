use crate::domain::{Address, Timestamp};
use serde::Deserialize;

/// A location accepted and stored by the server. Read-only on this side.
#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    #[serde(default)]
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserializes_a_record_as_stored_by_the_server() {
        let record = serde_json::from_value::<LocationRecord>(json!({
            "_id": "673c4a5e9f1b2c3d4e5f6a7b",
            "latitude": 14.5995,
            "longitude": 120.9842,
            "timestamp": "Tue, 19 Nov 2024 08:30:00 GMT",
            "address": { "full_address": "Manila, PH", "city": "Manila", "province": "", "country": "Philippines", "postcode": "" }
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("673c4a5e9f1b2c3d4e5f6a7b"));
        assert_eq!((record.latitude, record.longitude), (14.5995, 120.9842));
        assert_eq!(record.timestamp.map(|t| t.to_string()), Some("2024-11-19 08:30:00 UTC".to_string()));
        assert_eq!(record.address.unwrap().display_province(), "N/A");
    }

    #[test]
    fn deserializes_a_bare_record() {
        let record = serde_json::from_value::<LocationRecord>(json!({ "latitude": 1.0, "longitude": 2.0 })).unwrap();

        assert_eq!(
            record,
            LocationRecord {
                id: None,
                latitude: 1.0,
                longitude: 2.0,
                timestamp: None,
                address: None,
            }
        );
    }
}
