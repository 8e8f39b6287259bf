use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, info};

use crate::app::Action;

/// Worker that periodically advances the home slideshow
pub struct SlideshowWorker {
    action_tx: mpsc::Sender<Action>,
    interval: Duration,
    generation: u64,
}

impl SlideshowWorker {
    /// Create a new slideshow worker
    pub fn new(action_tx: mpsc::Sender<Action>, interval: Duration, generation: u64) -> Self {
        Self {
            action_tx,
            interval,
            generation,
        }
    }

    /// Run the worker loop until the receiving side goes away
    pub async fn run(self) {
        info!(
            "Slideshow {} started (interval: {:?})",
            self.generation, self.interval
        );

        let mut interval = time::interval(self.interval);
        interval.tick().await; // Skip first tick (fires immediately)

        loop {
            interval.tick().await;

            if self.action_tx.send(Action::SlideTick(self.generation)).await.is_err() {
                debug!("Action channel closed, stopping slideshow");
                return;
            }
        }
    }
}
