mod client;
mod location_api;
mod save_response;

pub use client::{ApiError, new_client};
pub use location_api::{HttpLocationApi, LocationApi};
pub use save_response::SaveResponse;
