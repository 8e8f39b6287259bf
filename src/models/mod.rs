pub mod article;
pub mod draft;
pub mod fixtures;
pub mod nav;
pub mod prediction;

pub use article::{ArticleId, NewsItem, PublicationState, RawNews};
pub use draft::{DraftArticle, DraftError};
pub use fixtures::{Match, MatchKey, StandingsRow};
pub use nav::NavCategory;
pub use prediction::{Outcome, Predictions};
