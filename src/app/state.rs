use chrono::{DateTime, Utc};

use crate::app::articles::Articles;
use crate::models::{ArticleId, DraftArticle, DraftError, Match, NavCategory, NewsItem, Predictions, StandingsRow};

/// Embed URL of the home page video until the admin changes it
pub const DEFAULT_FEATURED_VIDEO: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

/// Which top-level screen is shown, with the data scoped to it
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Screen {
    #[default]
    Home,
    Article(NewsItem),
    Category(CategoryView),
    Search {
        query: String,
        results: Vec<NewsItem>,
    },
    FanZone,
    Predictions,
    Dashboard,
}

impl Screen {
    pub fn is_home(&self) -> bool {
        matches!(self, Screen::Home)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Article(_) => "article",
            Screen::Category(_) => "category",
            Screen::Search { .. } => "search",
            Screen::FanZone => "fan-zone",
            Screen::Predictions => "predictions",
            Screen::Dashboard => "dashboard",
        }
    }
}

/// A category page and its two independent loads
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub category: NavCategory,
    /// Request token; results carrying any other token are stale
    pub token: u64,
    pub news: Vec<NewsItem>,
    pub standings: Vec<StandingsRow>,
    pub news_loading: bool,
    pub standings_loading: bool,
}

impl CategoryView {
    pub fn loading(category: NavCategory, token: u64) -> Self {
        Self {
            category,
            token,
            news: Vec::new(),
            standings: Vec::new(),
            news_loading: true,
            standings_loading: category.has_standings(),
        }
    }
}

/// Admin create/edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    /// Open form buffer, `None` when the form is closed
    pub draft: Option<DraftArticle>,
    /// Article being edited; `None` with an open draft means "create"
    pub editing: Option<ArticleId>,
}

impl AdminState {
    pub fn close(&mut self) {
        self.draft = None;
        self.editing = None;
    }
}

/// User input refused by the last transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Draft(DraftError),
    /// The article under edit was deleted before the draft was submitted
    MissingArticle(ArticleId),
    EmptyVideoUrl,
}

/// The whole view state. Only `reduce` produces new values.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    pub articles: Articles,
    pub matches: Vec<Match>,
    pub predictions: Predictions,
    /// True until the startup load has completed
    pub loading: bool,
    pub loaded_at: Option<DateTime<Utc>>,
    pub slide: usize,
    /// Whether the slide timer should be running
    pub slideshow_running: bool,
    /// Generation of the current slide timer; ticks from older timers are dropped
    pub slide_generation: u64,
    pub admin: AdminState,
    pub featured_video: String,
    pub last_rejection: Option<Rejection>,
    pub(crate) next_token: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            articles: Articles::default(),
            matches: Vec::new(),
            predictions: Predictions::default(),
            loading: true,
            loaded_at: None,
            slide: 0,
            slideshow_running: false,
            slide_generation: 0,
            admin: AdminState::default(),
            featured_video: DEFAULT_FEATURED_VIDEO.to_string(),
            last_rejection: None,
            next_token: 0,
        }
    }
}

impl AppState {
    pub(crate) fn issue_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    /// Article shown by the slideshow
    pub fn current_slide(&self) -> Option<&NewsItem> {
        let count = self.articles.slide_count();
        if count == 0 {
            return None;
        }
        self.articles.as_slice().get(self.slide % count)
    }

    /// Articles listed by the current screen, for index-based selection
    pub fn listed_articles(&self) -> &[NewsItem] {
        match &self.screen {
            Screen::Category(view) => view.news.as_slice(),
            Screen::Search { results, .. } => results.as_slice(),
            _ => self.articles.as_slice(),
        }
    }
}
