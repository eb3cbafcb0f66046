use crate::domain::Timestamp;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

// The location server emits either epoch millis, an ISO 8601 string or an HTTP date
// (e.g. "Mon, 19 Oct 2026 08:30:00 GMT").
impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Inner {
            Millis(i64),
            FractionalMillis(f64),
            Text(String),
        }

        let millis = match Inner::deserialize(deserializer)? {
            Inner::Millis(millis) => millis,
            Inner::FractionalMillis(millis) => millis as i64,
            Inner::Text(text) => return parse_text(&text).map(Timestamp).ok_or_else(|| Error::invalid_value(Unexpected::Str(&text), &"an ISO 8601 or RFC 2822 date")),
        };

        DateTime::from_timestamp_millis(millis)
            .map(Timestamp)
            .ok_or_else(|| Error::invalid_value(Unexpected::Signed(millis), &"epoch milliseconds within the supported range"))
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_rfc2822(text))
        .map(|date_time| date_time.with_timezone(&Utc))
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|naive| naive.and_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    fn expected() -> Timestamp {
        Timestamp(Utc.with_ymd_and_hms(2024, 11, 19, 8, 30, 0).unwrap())
    }

    #[rstest]
    #[case::epoch_millis(json!(1732005000000_i64))]
    #[case::fractional_millis(json!(1732005000000.0))]
    #[case::rfc3339(json!("2024-11-19T08:30:00Z"))]
    #[case::rfc3339_with_offset(json!("2024-11-19T16:30:00+08:00"))]
    #[case::iso_without_zone(json!("2024-11-19T08:30:00"))]
    #[case::iso_with_fraction(json!("2024-11-19T08:30:00.000"))]
    #[case::http_date(json!("Tue, 19 Nov 2024 08:30:00 GMT"))]
    fn deserializes_a_supported_timestamp(#[case] value: serde_json::Value) {
        let result = serde_json::from_value::<Timestamp>(value).unwrap();
        assert_eq!(result, expected());
    }

    #[rstest]
    #[case::garbage(json!("yesterday"))]
    #[case::boolean(json!(true))]
    #[case::out_of_range(json!(i64::MAX))]
    fn fails_for_an_unsupported_timestamp(#[case] value: serde_json::Value) {
        let result = serde_json::from_value::<Timestamp>(value);
        assert!(result.is_err());
    }

    #[test]
    fn displays_in_utc() {
        assert_eq!(expected().to_string(), "2024-11-19 08:30:00 UTC");
    }
}
