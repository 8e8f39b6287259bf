use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use url::Url;

/// First photo id of the deterministic placeholder series
pub const PLACEHOLDER_PHOTO_BASE: u64 = 1_574_629_810_360;

/// Image used for admin-created articles without one
pub const DEFAULT_ARTICLE_IMAGE: &str =
    "https://images.unsplash.com/photo-1574629810360-7efbbe195018?auto=format&fit=crop&q=80&w=800";

/// Upper bound (exclusive) of the view counts attached to fetched articles
const MAX_SEEDED_VIEWS: u64 = 5000;

/// Identifier of an article held in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArticleId(pub u64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editorial state of an article (only published articles exist)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationState {
    #[default]
    Published,
}

impl PublicationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationState::Published => "published",
        }
    }

    /// Label shown in the admin table
    pub fn label(&self) -> &'static str {
        match self {
            PublicationState::Published => "Pubblicato",
        }
    }
}

/// News record coerced from an Oracle payload, before normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNews {
    pub title: String,
    pub category: String,
    pub summary: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub time: String,
}

/// An article as shown by every screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Unique within the in-memory collections
    pub id: ArticleId,

    pub title: String,

    /// Navigation label, "Calciomercato", or free text from the admin form
    pub category: String,

    /// Body text, may contain lightweight markup
    pub summary: String,

    /// Source link, if the Oracle supplied one
    pub url: Option<String>,

    /// Absolute image URL
    pub image: String,

    /// Display time ("2 ore fa", "Adesso", ...)
    pub time: String,

    pub views: u64,

    pub state: PublicationState,
}

impl NewsItem {
    /// Normalize a fetched record at position `batch_index` of its batch
    pub fn from_raw(raw: RawNews, id: ArticleId, batch_index: usize) -> Self {
        let image = resolve_image(raw.image.as_deref(), batch_index);
        let views = seeded_views(&raw.title);

        Self {
            id,
            title: raw.title,
            category: raw.category,
            summary: raw.summary,
            url: raw.url,
            image,
            time: raw.time,
            views,
            state: PublicationState::Published,
        }
    }

    /// Case-insensitive substring match on title, summary or category.
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

/// Deterministic placeholder for the record at `index` of its batch
pub fn placeholder_image(index: usize) -> String {
    format!(
        "https://images.unsplash.com/photo-{}-7efbbe195018?auto=format&fit=crop&q=80&w=800",
        PLACEHOLDER_PHOTO_BASE + index as u64
    )
}

/// True for well-formed absolute http(s) URLs with a host
pub fn is_absolute_image_url(candidate: &str) -> bool {
    let candidate = candidate.trim();
    if !(candidate.starts_with("http://") || candidate.starts_with("https://")) {
        return false;
    }

    Url::parse(candidate)
        .map(|u| u.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}

/// Keep a well-formed image URL, otherwise substitute the placeholder
pub fn resolve_image(image: Option<&str>, index: usize) -> String {
    match image {
        Some(url) if is_absolute_image_url(url) => url.trim().to_string(),
        _ => placeholder_image(index),
    }
}

/// View count in `0..5000`, stable for a given title
pub fn seeded_views(title: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    title.hash(&mut hasher);

    let mut rng = StdRng::seed_from_u64(hasher.finish());
    rng.gen_range(0..MAX_SEEDED_VIEWS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, image: Option<&str>) -> RawNews {
        RawNews {
            title: title.to_string(),
            category: "Serie A".to_string(),
            summary: "Sintesi".to_string(),
            image: image.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_placeholder_for_missing_or_relative_image() {
        let missing = NewsItem::from_raw(raw("A", None), ArticleId(0), 3);
        assert_eq!(
            missing.image,
            "https://images.unsplash.com/photo-1574629810363-7efbbe195018?auto=format&fit=crop&q=80&w=800"
        );

        let relative = NewsItem::from_raw(raw("B", Some("/img/foto.jpg")), ArticleId(1), 0);
        assert_eq!(relative.image, placeholder_image(0));

        let bare_scheme = NewsItem::from_raw(raw("C", Some("https://")), ArticleId(2), 1);
        assert_eq!(bare_scheme.image, placeholder_image(1));
    }

    #[test]
    fn test_absolute_image_passes_through() {
        let url = "https://cdn.example.com/derby.jpg";
        let item = NewsItem::from_raw(raw("Derby", Some(url)), ArticleId(0), 5);
        assert_eq!(item.image, url);
        assert_eq!(item.state, PublicationState::Published);
    }

    #[test]
    fn test_seeded_views_stable_and_bounded() {
        let first = seeded_views("Inter-Milan 2-1");
        assert_eq!(first, seeded_views("Inter-Milan 2-1"));
        assert!(first < MAX_SEEDED_VIEWS);
    }

    #[test]
    fn test_matches_query() {
        let item = NewsItem::from_raw(raw("Scudetto in bilico", None), ArticleId(0), 0);
        assert!(item.matches_query("scudetto"));
        assert!(item.matches_query("serie a"));
        assert!(item.matches_query("sintesi"));
        assert!(!item.matches_query("mercato"));
    }
}
