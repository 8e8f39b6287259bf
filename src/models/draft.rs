use thiserror::Error;

use crate::models::{NavCategory, NewsItem};

/// Why the admin form refused to submit
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("article title is required")]
    MissingTitle,

    #[error("article body is required")]
    MissingSummary,
}

/// Edit buffer behind the admin create/edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftArticle {
    pub title: String,
    pub category: String,
    pub summary: String,
    /// Empty means "no image supplied"
    pub image: String,
}

impl Default for DraftArticle {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: NavCategory::default_draft().label().to_string(),
            summary: String::new(),
            image: String::new(),
        }
    }
}

impl DraftArticle {
    /// Buffer pre-filled from an existing article
    pub fn from_article(article: &NewsItem) -> Self {
        Self {
            title: article.title.clone(),
            category: article.category.clone(),
            summary: article.summary.clone(),
            image: article.image.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.summary.trim().is_empty() {
            return Err(DraftError::MissingSummary);
        }
        Ok(())
    }

    /// Category to store, falling back to the first menu entry
    pub fn category_or_default(&self) -> String {
        let category = self.category.trim();
        if category.is_empty() {
            NavCategory::default_draft().label().to_string()
        } else {
            category.to_string()
        }
    }

    /// Image to store, `None` when the field was left empty
    pub fn supplied_image(&self) -> Option<&str> {
        let image = self.image.trim();
        (!image.is_empty()).then_some(image)
    }
}
