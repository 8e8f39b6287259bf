use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::FootballService;
use crate::app::{reduce, Action, AppState, Effect};
use crate::models::NavCategory;
use crate::workers::SlideshowWorker;

/// Capacity of the channel carrying background results back to the state machine
const ACTION_BUFFER: usize = 64;

/// Owns the view state and runs the effects its transitions request.
///
/// Background work (fetches, the slide timer) never touches the state
/// directly: it sends actions back through the channel and the caller feeds
/// them to `apply` on the single logical thread that owns the orchestrator.
pub struct Orchestrator {
    service: Arc<FootballService>,
    state: AppState,
    action_tx: mpsc::Sender<Action>,
    action_rx: mpsc::Receiver<Action>,
    slide_interval: Duration,
    slideshow: Option<JoinHandle<()>>,
}

impl Orchestrator {
    pub fn new(service: Arc<FootballService>, slide_interval: Duration) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_BUFFER);

        Self {
            service,
            state: AppState::default(),
            action_tx,
            action_rx,
            slide_interval,
            slideshow: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Kick off the one-off startup load (news and live scores, concurrently)
    pub fn start(&self) {
        let service = Arc::clone(&self.service);
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            info!("Loading news and live scores");

            let (news, matches) =
                tokio::join!(service.fetch_news(None), service.fetch_live_scores());

            info!(
                "Startup load complete: {} news, {} matches",
                news.len(),
                matches.len()
            );

            let loaded = Action::StartupLoaded {
                news,
                matches,
                fetched_at: Utc::now(),
            };
            if let Err(e) = tx.send(loaded).await {
                warn!("Failed to deliver startup load: {}", e);
            }
        });
    }

    /// Next action produced by background work
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Run one transition and carry out its effects
    pub fn apply(&mut self, action: Action) {
        let transition = reduce(std::mem::take(&mut self.state), action);
        self.state = transition.state;

        for effect in transition.effects {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: Effect) {
        debug!("Effect: {:?}", effect);

        match effect {
            Effect::FetchCategory { category, token } => self.fetch_category(category, token),
            Effect::StartSlideshow { generation } => {
                self.stop_slideshow();
                let worker =
                    SlideshowWorker::new(self.action_tx.clone(), self.slide_interval, generation);
                self.slideshow = Some(tokio::spawn(worker.run()));
            }
            Effect::StopSlideshow => self.stop_slideshow(),
        }
    }

    /// Category news and standings load independently; each reports back on its own
    fn fetch_category(&self, category: NavCategory, token: u64) {
        let service = Arc::clone(&self.service);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let news = service.fetch_news(Some(category)).await;
            if tx.send(Action::CategoryNewsLoaded { token, news }).await.is_err() {
                warn!("Category news for {} arrived after shutdown", category);
            }
        });

        if !category.has_standings() {
            return;
        }

        let service = Arc::clone(&self.service);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let rows = service.fetch_standings(category.label()).await;
            if tx.send(Action::StandingsLoaded { token, rows }).await.is_err() {
                warn!("Standings for {} arrived after shutdown", category);
            }
        });
    }

    fn stop_slideshow(&mut self) {
        if let Some(handle) = self.slideshow.take() {
            handle.abort();
            debug!("Slideshow stopped");
        }
    }

    pub fn slideshow_active(&self) -> bool {
        self.slideshow.is_some()
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        self.stop_slideshow();
    }
}
