use crate::app_config::AppConfig;
use reqwest::{Client, StatusCode};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, ApiError> {
    let client = Client::builder().timeout(config.server().request_timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}
