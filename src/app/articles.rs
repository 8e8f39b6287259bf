use tracing::{debug, info};

use crate::models::article::DEFAULT_ARTICLE_IMAGE;
use crate::models::{ArticleId, DraftArticle, DraftError, NewsItem, PublicationState, RawNews};

/// Number of leading articles rotated by the home slideshow
pub const MAX_SLIDES: usize = 5;

/// Display time given to articles created from the admin panel
const FRESH_ARTICLE_TIME: &str = "Adesso";

/// The in-memory article list plus the id allocator.
///
/// Ids come from a single monotonic counter, so fetched, category-scoped and
/// admin-created articles never share an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Articles {
    items: Vec<NewsItem>,
    next_id: u64,
}

/// Aggregates shown on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub published: usize,
    pub total_views: u64,
}

impl Articles {
    pub fn iter(&self) -> impl Iterator<Item = &NewsItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ArticleId) -> Option<&NewsItem> {
        self.items.iter().find(|a| a.id == id)
    }

    fn allocate_id(&mut self) -> ArticleId {
        let id = ArticleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Assign fresh ids and normalize a fetched batch without storing it
    pub fn normalize(&mut self, batch: Vec<RawNews>) -> Vec<NewsItem> {
        batch
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let id = self.allocate_id();
                NewsItem::from_raw(raw, id, index)
            })
            .collect()
    }

    /// Replace the list with a freshly fetched feed
    pub fn replace_feed(&mut self, batch: Vec<RawNews>) {
        self.items = self.normalize(batch);
        info!("Article feed loaded: {} articles", self.items.len());
    }

    /// Prepend a new published article built from `draft`
    pub fn create(&mut self, draft: &DraftArticle) -> Result<ArticleId, DraftError> {
        draft.validate()?;

        let id = self.allocate_id();
        let article = NewsItem {
            id,
            title: draft.title.trim().to_string(),
            category: draft.category_or_default(),
            summary: draft.summary.trim().to_string(),
            url: None,
            image: draft
                .supplied_image()
                .unwrap_or(DEFAULT_ARTICLE_IMAGE)
                .to_string(),
            time: FRESH_ARTICLE_TIME.to_string(),
            views: 0,
            state: PublicationState::Published,
        };

        info!("Created article {}: {}", id, article.title);
        self.items.insert(0, article);
        Ok(id)
    }

    /// Overwrite title, category and summary; the image only when one was supplied.
    /// Returns false when no article has `id`.
    pub fn update(&mut self, id: ArticleId, draft: &DraftArticle) -> Result<bool, DraftError> {
        draft.validate()?;

        let Some(article) = self.items.iter_mut().find(|a| a.id == id) else {
            debug!("Update of missing article {} ignored", id);
            return Ok(false);
        };

        article.title = draft.title.trim().to_string();
        article.category = draft.category_or_default();
        article.summary = draft.summary.trim().to_string();
        if let Some(image) = draft.supplied_image() {
            article.image = image.to_string();
        }

        info!("Updated article {}", id);
        Ok(true)
    }

    /// Remove by id; returns whether anything was removed
    pub fn delete(&mut self, id: ArticleId) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);

        let removed = self.items.len() != before;
        if removed {
            info!("Deleted article {}", id);
        }
        removed
    }

    /// Articles whose title, summary or category contain `query`, case-insensitively
    pub fn search(&self, query: &str) -> Vec<NewsItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|a| a.matches_query(&needle))
            .cloned()
            .collect()
    }

    pub fn slide_count(&self) -> usize {
        self.items.len().min(MAX_SLIDES)
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            published: self
                .items
                .iter()
                .filter(|a| a.state == PublicationState::Published)
                .count(),
            total_views: self.items.iter().map(|a| a.views).sum(),
        }
    }
}
