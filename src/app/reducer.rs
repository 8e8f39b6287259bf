use tracing::{debug, warn};

use crate::app::action::{Action, Effect};
use crate::app::state::{AppState, CategoryView, Rejection, Screen};
use crate::models::fixtures::key_at;
use crate::models::DraftArticle;

/// New state plus the effects the runtime must carry out
#[derive(Debug)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

/// Apply one action to the view state
pub fn reduce(mut state: AppState, action: Action) -> Transition {
    // A blank query changes nothing, not even the last rejection
    if let Action::Search(query) = &action {
        if query.trim().is_empty() {
            return Transition {
                state,
                effects: Vec::new(),
            };
        }
    }

    let mut effects = Vec::new();
    state.last_rejection = None;

    match action {
        Action::StartupLoaded {
            news,
            matches,
            fetched_at,
        } => {
            state.articles.replace_feed(news);
            state.matches = matches;
            state.loading = false;
            state.loaded_at = Some(fetched_at);
            state.slide = 0;
        }

        Action::GoHome => state.screen = Screen::Home,

        Action::OpenArticle(article) => state.screen = Screen::Article(article),

        Action::OpenCategory(category) => {
            let token = state.issue_token();
            state.screen = Screen::Category(CategoryView::loading(category, token));
            effects.push(Effect::FetchCategory { category, token });
        }

        Action::CategoryNewsLoaded { token, news } => match &mut state.screen {
            Screen::Category(view) if view.token == token => {
                view.news = state.articles.normalize(news);
                view.news_loading = false;
            }
            _ => debug!("Discarding stale category news (token {})", token),
        },

        Action::StandingsLoaded { token, rows } => match &mut state.screen {
            Screen::Category(view) if view.token == token => {
                view.standings = rows;
                view.standings_loading = false;
            }
            _ => debug!("Discarding stale standings (token {})", token),
        },

        Action::Search(query) => {
            let query = query.trim();
            let results = state.articles.search(query);
            debug!("Search {:?}: {} results", query, results.len());
            state.screen = Screen::Search {
                query: query.to_string(),
                results,
            };
        }

        Action::OpenFanZone => state.screen = Screen::FanZone,
        Action::OpenPredictions => state.screen = Screen::Predictions,
        Action::OpenDashboard => state.screen = Screen::Dashboard,

        Action::SlideTick(generation) => {
            let count = state.articles.slide_count();
            if generation != state.slide_generation || !state.slideshow_running {
                debug!("Discarding tick from stopped slideshow (generation {})", generation);
            } else if state.screen.is_home() && count > 0 {
                state.slide = (state.slide + 1) % count;
            }
        }

        Action::SelectSlide(index) => {
            if index < state.articles.slide_count() {
                state.slide = index;
            }
        }

        Action::Predict {
            match_index,
            outcome,
        } => match key_at(&state.matches, match_index) {
            Some(key) => state.predictions.record(key, outcome),
            None => warn!("Prediction for unknown match index {}", match_index),
        },

        Action::OpenNewDraft => {
            state.admin.editing = None;
            state.admin.draft = Some(DraftArticle::default());
        }

        Action::OpenEditDraft(id) => match state.articles.get(id) {
            Some(article) => {
                state.admin.draft = Some(DraftArticle::from_article(article));
                state.admin.editing = Some(id);
            }
            None => warn!("Cannot edit missing article {}", id),
        },

        Action::EditDraft(draft) => {
            if state.admin.draft.is_some() {
                state.admin.draft = Some(draft);
            }
        }

        Action::SubmitDraft => submit_draft(&mut state),

        Action::CancelDraft => state.admin.close(),

        Action::DeleteArticle(id) => {
            state.articles.delete(id);
        }

        Action::SetFeaturedVideo(url) => {
            let url = url.trim();
            if url.is_empty() {
                state.last_rejection = Some(Rejection::EmptyVideoUrl);
            } else {
                state.featured_video = url.to_string();
            }
        }
    }

    if !matches!(state.screen, Screen::Dashboard) {
        state.admin.close();
    }

    let should_run = state.screen.is_home() && !state.articles.is_empty();
    if should_run && !state.slideshow_running {
        state.slideshow_running = true;
        state.slide_generation += 1;
        effects.push(Effect::StartSlideshow {
            generation: state.slide_generation,
        });
    } else if !should_run && state.slideshow_running {
        state.slideshow_running = false;
        effects.push(Effect::StopSlideshow);
    }

    debug!("Screen: {}", state.screen.name());
    Transition { state, effects }
}

fn submit_draft(state: &mut AppState) {
    let Some(draft) = state.admin.draft.take() else {
        return;
    };

    let result = match state.admin.editing {
        Some(id) => match state.articles.update(id, &draft) {
            Ok(true) => Ok(()),
            Ok(false) => Err(Rejection::MissingArticle(id)),
            Err(e) => Err(Rejection::Draft(e)),
        },
        None => state
            .articles
            .create(&draft)
            .map(|_| ())
            .map_err(Rejection::Draft),
    };

    match result {
        Ok(()) => state.admin.editing = None,
        Err(Rejection::MissingArticle(id)) => {
            warn!("Article {} was removed while being edited, draft dropped", id);
            state.admin.close();
            state.last_rejection = Some(Rejection::MissingArticle(id));
        }
        Err(rejection) => {
            warn!("Draft rejected: {:?}", rejection);
            state.admin.draft = Some(draft);
            state.last_rejection = Some(rejection);
        }
    }
}
