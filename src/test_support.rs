use crate::api::{ApiError, LocationApi, SaveResponse};
use crate::domain::{LocationRecord, Position};
use crate::sensor::{PositionSource, PositionStream, SensorError, WatchOptions};
use crate::view::{ErrorBanner, HistoryEntry, HistoryView, MapWidget, MarkerId, TileLayer};
use async_trait::async_trait;
use futures::StreamExt;
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::time::Instant;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Waits until `condition` holds, panicking after a second.
pub async fn wait_until(condition: impl Fn() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(1);
    while !condition() {
        assert!(Instant::now() < deadline, "condition not met in time");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[derive(Debug)]
pub struct ChannelSource {
    available: bool,
    rx: Mutex<Option<UnboundedReceiver<Result<Position, SensorError>>>>,
    watches: AtomicUsize,
}

impl ChannelSource {
    pub fn new() -> (Self, UnboundedSender<Result<Position, SensorError>>) {
        let (tx, rx) = unbounded_channel();
        let source = ChannelSource {
            available: true,
            rx: Mutex::new(Some(rx)),
            watches: AtomicUsize::new(0),
        };
        (source, tx)
    }

    pub fn unavailable() -> Self {
        let (mut source, _) = ChannelSource::new();
        source.available = false;
        source
    }

    pub fn watches(&self) -> usize {
        self.watches.load(Ordering::SeqCst)
    }
}

impl PositionSource for ChannelSource {
    fn is_available(&self) -> bool {
        self.available
    }

    fn watch(&self, _options: WatchOptions) -> Result<PositionStream, SensorError> {
        self.watches.fetch_add(1, Ordering::SeqCst);
        let rx = self.rx.lock().unwrap().take().ok_or_else(|| SensorError::Source("already watched".to_string()))?;
        Ok(UnboundedReceiverStream::new(rx).boxed())
    }
}

#[derive(Debug, Default)]
pub struct FakeLocationApi {
    save_responses: Mutex<VecDeque<(Option<Duration>, Result<SaveResponse, ApiError>)>>,
    location_responses: Mutex<VecDeque<Result<Vec<LocationRecord>, ApiError>>>,
    saved: Mutex<Vec<Position>>,
    location_requests: AtomicUsize,
    save_delay: Mutex<Option<Duration>>,
}

impl FakeLocationApi {
    pub fn on_save(&self, response: Result<SaveResponse, ApiError>) -> &Self {
        self.save_responses.lock().unwrap().push_back((None, response));
        self
    }

    /// Queues a response that is only answered once `delay` has passed, overriding [`Self::delay_saves`].
    pub fn on_save_after(&self, delay: Duration, response: Result<SaveResponse, ApiError>) -> &Self {
        self.save_responses.lock().unwrap().push_back((Some(delay), response));
        self
    }

    pub fn on_locations(&self, response: Result<Vec<LocationRecord>, ApiError>) -> &Self {
        self.location_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn delay_saves(&self, delay: Duration) {
        *self.save_delay.lock().unwrap() = Some(delay);
    }

    pub fn saved(&self) -> Vec<Position> {
        self.saved.lock().unwrap().clone()
    }

    pub fn location_requests(&self) -> usize {
        self.location_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationApi for FakeLocationApi {
    async fn save_location(&self, position: Position) -> Result<SaveResponse, ApiError> {
        self.saved.lock().unwrap().push(position);
        let (delay, response) = self
            .save_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((None, Err(ApiError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))));

        let delay = delay.or(*self.save_delay.lock().unwrap());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        response
    }

    async fn locations(&self) -> Result<Vec<LocationRecord>, ApiError> {
        self.location_requests.fetch_add(1, Ordering::SeqCst);
        self.location_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ApiError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)))
    }
}

#[derive(Debug, Default)]
pub struct MapRecord {
    pub view: Option<(Position, u8)>,
    pub tile_layers: Vec<TileLayer>,
    pub markers: BTreeMap<MarkerId, (Position, String)>,
    pub open_popup: Option<MarkerId>,
}

pub type SharedMapRecord = Arc<Mutex<MapRecord>>;

#[derive(Debug)]
pub struct FakeMapWidget {
    record: SharedMapRecord,
    next_id: u64,
}

impl FakeMapWidget {
    pub fn new() -> (Self, SharedMapRecord) {
        let record = SharedMapRecord::default();
        (FakeMapWidget { record: record.clone(), next_id: 0 }, record)
    }
}

impl MapWidget for FakeMapWidget {
    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.record.lock().unwrap().tile_layers.push(layer.clone());
    }

    fn set_view(&mut self, center: Position, zoom: u8) {
        self.record.lock().unwrap().view = Some((center, zoom));
    }

    fn add_marker(&mut self, position: Position, popup: &str) -> MarkerId {
        self.next_id += 1;
        let marker = MarkerId(self.next_id);
        self.record.lock().unwrap().markers.insert(marker, (position, popup.to_string()));
        marker
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        let mut record = self.record.lock().unwrap();
        record.markers.remove(&marker);
        if record.open_popup == Some(marker) {
            record.open_popup = None;
        }
    }

    fn open_popup(&mut self, marker: MarkerId) {
        self.record.lock().unwrap().open_popup = Some(marker);
    }
}

#[derive(Debug, Default)]
pub struct RecordingHistoryView {
    renders: Mutex<Vec<Vec<HistoryEntry>>>,
}

impl RecordingHistoryView {
    pub fn renders(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    pub fn current(&self) -> Option<Vec<HistoryEntry>> {
        self.renders.lock().unwrap().last().cloned()
    }
}

impl HistoryView for RecordingHistoryView {
    fn render(&self, entries: &[HistoryEntry]) {
        self.renders.lock().unwrap().push(entries.to_vec());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BannerEvent {
    Shown(String),
    Hidden,
}

#[derive(Debug, Default)]
pub struct RecordingBanner {
    events: Mutex<Vec<(Instant, BannerEvent)>>,
}

impl RecordingBanner {
    pub fn events(&self) -> Vec<(Instant, BannerEvent)> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|(_, event)| match event {
                BannerEvent::Shown(message) => Some(message),
                BannerEvent::Hidden => None,
            })
            .collect()
    }

    pub fn visible_message(&self) -> Option<String> {
        match self.events.lock().unwrap().last() {
            Some((_, BannerEvent::Shown(message))) => Some(message.clone()),
            _ => None,
        }
    }
}

impl ErrorBanner for RecordingBanner {
    fn show(&self, message: &str) {
        self.events.lock().unwrap().push((Instant::now(), BannerEvent::Shown(message.to_string())));
    }

    fn hide(&self) {
        self.events.lock().unwrap().push((Instant::now(), BannerEvent::Hidden));
    }
}
