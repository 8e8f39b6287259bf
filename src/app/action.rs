use chrono::{DateTime, Utc};

use crate::models::{ArticleId, DraftArticle, Match, NavCategory, NewsItem, Outcome, RawNews, StandingsRow};

/// Everything that can change the view state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Result of the one-off startup load
    StartupLoaded {
        news: Vec<RawNews>,
        matches: Vec<Match>,
        fetched_at: DateTime<Utc>,
    },
    GoHome,
    OpenArticle(NewsItem),
    OpenCategory(NavCategory),
    CategoryNewsLoaded {
        token: u64,
        news: Vec<RawNews>,
    },
    StandingsLoaded {
        token: u64,
        rows: Vec<StandingsRow>,
    },
    Search(String),
    OpenFanZone,
    OpenPredictions,
    OpenDashboard,
    /// Timer tick tagged with the generation of the slideshow that sent it
    SlideTick(u64),
    SelectSlide(usize),
    Predict {
        match_index: usize,
        outcome: Outcome,
    },
    OpenNewDraft,
    OpenEditDraft(ArticleId),
    EditDraft(DraftArticle),
    SubmitDraft,
    CancelDraft,
    DeleteArticle(ArticleId),
    SetFeaturedVideo(String),
}

/// Side effects requested by a transition, run by the orchestrator
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchCategory { category: NavCategory, token: u64 },
    StartSlideshow { generation: u64 },
    StopSlideshow,
}
