use crate::domain::Position;
use crate::sensor::WatchOptions;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    server: Server,
    tracking: Tracking,
    map: Map,
    notifier: Notifier,
    sensor: Sensor,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("WHEREABOUTS").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()
    }

    /// A replayed track must deliver its next fix before the watch gives up waiting for it.
    fn validate(self) -> Result<Self, ConfigError> {
        let max_wait = self.tracking.watch_options().max_wait;
        if self.sensor.replay_file().is_some() && self.sensor.interval() >= max_wait {
            return Err(ConfigError::Message(format!(
                "sensor.interval_ms ({}) must be shorter than tracking.max_wait_ms ({})",
                self.sensor.interval().as_millis(),
                max_wait.as_millis()
            )));
        }

        Ok(self)
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn tracking(&self) -> &Tracking {
        &self.tracking
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    command_buffer_size: usize,
}

impl Core {
    pub fn command_buffer_size(&self) -> usize {
        self.command_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    url: String,
    request_timeout_ms: u64,
}

impl Server {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Deserialize)]
pub struct Tracking {
    high_accuracy: bool,
    max_wait_ms: u64,
    max_cache_age_ms: u64,
}

impl Tracking {
    pub fn watch_options(&self) -> WatchOptions {
        WatchOptions {
            high_accuracy: self.high_accuracy,
            max_wait: Duration::from_millis(self.max_wait_ms),
            max_cache_age: Duration::from_millis(self.max_cache_age_ms),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    default_center: Position,
    default_zoom: u8,
    marker_zoom: u8,
    tile_url: String,
    attribution: String,
}

impl Map {
    pub fn default_center(&self) -> Position {
        self.default_center
    }

    pub fn default_zoom(&self) -> u8 {
        self.default_zoom
    }

    pub fn marker_zoom(&self) -> u8 {
        self.marker_zoom
    }

    pub fn tile_url(&self) -> &str {
        &self.tile_url
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }
}

#[derive(Debug, Deserialize)]
pub struct Notifier {
    display_ms: u64,
}

impl Notifier {
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }
}

#[derive(Debug, Deserialize)]
pub struct Sensor {
    replay_file: Option<String>,
    interval_ms: u64,
}

impl Sensor {
    pub fn replay_file(&self) -> Option<&Path> {
        self.replay_file.as_deref().filter(|file| !file.is_empty()).map(Path::new)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
impl AppConfig {
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        AppConfig::from_toml(include_str!("../config.toml"))
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { command_buffer_size: 1 },
                server: Server {
                    url: "http://localhost:5000".to_string(),
                    request_timeout_ms: 1_000,
                },
                tracking: Tracking {
                    high_accuracy: true,
                    max_wait_ms: 10_000,
                    max_cache_age_ms: 0,
                },
                map: Map {
                    default_center: Position::new(12.8797, 121.774),
                    default_zoom: 6,
                    marker_zoom: 10,
                    tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                    attribution: "© OpenStreetMap contributors".to_string(),
                },
                notifier: Notifier { display_ms: 5_000 },
                sensor: Sensor {
                    replay_file: None,
                    interval_ms: 1_000,
                },
            },
        }
    }

    pub fn server_url(mut self, url: String) -> Self {
        self.config.server.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
