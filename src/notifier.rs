use crate::view::ErrorBanner;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument};

#[derive(Debug, Default)]
struct HideSchedule {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

/// Shows one message at a time on the error banner and hides it once `display` has passed since
/// the most recent [`ErrorNotifier::show`].
#[derive(Clone, Debug)]
pub struct ErrorNotifier {
    banner: Arc<dyn ErrorBanner>,
    display: Duration,
    schedule: Arc<Mutex<HideSchedule>>,
}

impl ErrorNotifier {
    pub fn new(banner: Arc<dyn ErrorBanner>, display: Duration) -> Self {
        ErrorNotifier {
            banner,
            display,
            schedule: Arc::new(Mutex::new(HideSchedule::default())),
        }
    }

    #[instrument(skip(self))]
    pub fn show(&self, message: &str) {
        let mut schedule = self.schedule.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = schedule.task.take() {
            task.abort();
        }

        schedule.generation += 1;
        self.banner.show(message);

        let generation = schedule.generation;
        let banner = self.banner.clone();
        let display = self.display;
        let shared = self.schedule.clone();
        schedule.task = Some(tokio::spawn(async move {
            sleep(display).await;

            // A newer message may have been shown while this task was waking up
            let mut schedule = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if schedule.generation == generation {
                banner.hide();
                schedule.task = None;
                debug!("🔕 Error banner hidden");
            }
        }));
    }
}
