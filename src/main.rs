use crate::api::HttpLocationApi;
use crate::app_config::AppConfig;
use crate::console::{ConsoleBanner, ConsoleHistory, ConsoleMap};
use crate::sensor::{NoSensor, PositionSource, ReplaySource};
use crate::session::{Capabilities, Session};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{info, warn};

mod api;
mod app_config;
mod commands;
mod console;
mod domain;
mod history;
mod notifier;
mod position_deserializer;
mod sensor;
mod session;
mod submitter;
#[cfg(test)]
mod test_support;
mod timestamp_deserializer;
mod tracking;
mod view;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = api::new_client(&config)?;
    let api = Arc::new(HttpLocationApi::new(client, config.server().url()));

    let source: Arc<dyn PositionSource> = match config.sensor().replay_file() {
        Some(path) => Arc::new(ReplaySource::load(path, config.sensor().interval())?),
        None => {
            warn!("⚠️ No track configured, running without a position sensor");
            Arc::new(NoSensor)
        }
    };

    let mut session = Session::new(
        &config,
        Capabilities {
            api,
            source,
            map_widget: Box::new(ConsoleMap::default()),
            history_view: Arc::new(ConsoleHistory),
            banner: Arc::new(ConsoleBanner),
        },
    );
    // A failing history load is shown on the banner, tracking still works
    let _ = session.init().await;

    let (tx, rx) = mpsc::channel(config.core().command_buffer_size());
    task::spawn(commands::read_commands(tokio::io::stdin(), tx));

    info!("🔥 {} is up and running, type start, stop, refresh or quit", env!("CARGO_PKG_NAME"));
    commands::run(&mut session, rx).await;

    Ok(())
}
