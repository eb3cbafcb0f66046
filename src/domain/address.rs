use serde::Deserialize;

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";

/// Reverse geocoded address as returned by the location server. Every field is optional, an empty
/// string counts as absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub full_address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

impl Address {
    #[cfg(test)]
    pub fn with_full_address(full_address: impl Into<String>) -> Self {
        Address {
            full_address: Some(full_address.into()),
            ..Default::default()
        }
    }

    pub fn display_full_address(&self) -> &str {
        or_placeholder(self.full_address.as_deref(), UNKNOWN)
    }

    pub fn display_city(&self) -> &str {
        or_placeholder(self.city.as_deref(), NOT_AVAILABLE)
    }

    pub fn display_province(&self) -> &str {
        or_placeholder(self.province.as_deref(), NOT_AVAILABLE)
    }

    pub fn display_country(&self) -> &str {
        or_placeholder(self.country.as_deref(), NOT_AVAILABLE)
    }

    pub fn display_postcode(&self) -> &str {
        or_placeholder(self.postcode.as_deref(), NOT_AVAILABLE)
    }
}

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.map(str::trim).filter(|value| !value.is_empty()).unwrap_or(placeholder)
}
