use crate::domain::Address;
use serde::{Deserialize, Deserializer};

const SUCCESS: &str = "success";

/// Body of a `POST /save_location` response that came back with a 2xx status.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveResponse {
    Saved {
        address: Address,
        id: Option<String>,
        message: Option<String>,
    },
    Rejected {
        message: Option<String>,
    },
}

impl<'de> Deserialize<'de> for SaveResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            status: String,
            #[serde(default)]
            address: Option<Address>,
            #[serde(default)]
            id: Option<String>,
            #[serde(default)]
            message: Option<String>,
        }

        let inner = Inner::deserialize(deserializer)?;
        if inner.status == SUCCESS {
            Ok(SaveResponse::Saved {
                address: inner.address.unwrap_or_default(),
                id: inner.id,
                message: inner.message,
            })
        } else {
            Ok(SaveResponse::Rejected { message: inner.message })
        }
    }
}
