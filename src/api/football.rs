use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::time;
use tracing::{debug, info, warn};

use crate::api::oracle::{Oracle, OracleError};
use crate::api::payload::{self, match_from_value, news_from_value, standings_from_value};
use crate::models::{Match, NavCategory, RawNews, StandingsRow};

/// Data access over the Oracle: news, live scores and standings.
///
/// Every operation fails open: transport errors, timeouts and malformed
/// payloads are logged and yield an empty list.
pub struct FootballService {
    oracle: Arc<dyn Oracle>,
    timeout: Duration,
}

const RECORD_FIELDS_NEWS: &str =
    "title, category, summary, url, image (URL di un'immagine reale pertinente), time";

pub fn news_prompt(category: Option<NavCategory>) -> String {
    match category.filter(NavCategory::is_scoped) {
        Some(category) => format!(
            "Trova le ultime 8 notizie reali sul calcio riguardanti specificamente la sezione \"{}\" di oggi. Restituisci un array JSON di oggetti con: {}.",
            category.label(),
            RECORD_FIELDS_NEWS
        ),
        None => format!(
            "Trova le ultime 15 notizie reali sul calcio mondiale di oggi (Serie A, Champions, etc). Restituisci un array JSON di oggetti con: {}.",
            RECORD_FIELDS_NEWS
        ),
    }
}

pub fn live_scores_prompt() -> String {
    "Risultati calcio reali di oggi. Restituisci un array JSON di oggetti con: home, away, score, league, status."
        .to_string()
}

pub fn standings_prompt(league: &str) -> String {
    format!(
        "Fornisci la classifica attuale reale per la competizione \"{}\". Restituisci un array JSON di oggetti con: position, team, played, points.",
        league
    )
}

impl FootballService {
    pub fn new(oracle: Arc<dyn Oracle>, timeout: Duration) -> Self {
        Self { oracle, timeout }
    }

    /// Latest news: ~15 general items, or ~8 scoped to `category`
    pub async fn fetch_news(&self, category: Option<NavCategory>) -> Vec<RawNews> {
        self.request("news", news_prompt(category), news_from_value)
            .await
    }

    /// Today's match results
    pub async fn fetch_live_scores(&self) -> Vec<Match> {
        self.request("live_scores", live_scores_prompt(), match_from_value)
            .await
    }

    /// Current table for `league`, in the order returned
    pub async fn fetch_standings(&self, league: &str) -> Vec<StandingsRow> {
        self.request("standings", standings_prompt(league), standings_from_value)
            .await
    }

    async fn request<T>(
        &self,
        operation: &'static str,
        prompt: String,
        coerce: fn(&Value) -> Option<T>,
    ) -> Vec<T> {
        debug!("Oracle request [{}]: {}", operation, prompt);

        let text = match self.ask(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Oracle {} request failed: {}", operation, e);
                return Vec::new();
            }
        };

        let records = match payload::parse_records(&text) {
            Ok(records) => records,
            Err(e) => {
                warn!("Oracle {} response rejected: {}", operation, e);
                return Vec::new();
            }
        };

        let total = records.len();
        let items: Vec<T> = records.iter().filter_map(coerce).collect();

        if items.len() < total {
            debug!(
                "Dropped {} malformed {} records",
                total - items.len(),
                operation
            );
        }

        info!("Oracle returned {} {} records", items.len(), operation);
        items
    }

    async fn ask(&self, prompt: &str) -> Result<String, OracleError> {
        time::timeout(self.timeout, self.oracle.generate(prompt))
            .await
            .map_err(|_| OracleError::Timeout(self.timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedOracle;

    const NEWS: &str = r#"[
        {"title": "Scudetto, corsa a tre", "category": "Serie A", "summary": "Analisi", "image": "https://cdn.example.com/a.jpg", "time": "2 ore fa"},
        {"summary": "record senza titolo"},
        {"title": "Mercato estivo", "category": "Calciomercato"}
    ]"#;

    fn service(oracle: ScriptedOracle) -> FootballService {
        FootballService::new(Arc::new(oracle), Duration::from_millis(200))
    }

    #[tokio::test]
    async fn test_fetch_news_drops_malformed_records() {
        let service = service(ScriptedOracle::new().respond("ultime 15 notizie", NEWS));

        let news = service.fetch_news(None).await;

        assert_eq!(news.len(), 2);
        assert_eq!(news[0].title, "Scudetto, corsa a tre");
        assert_eq!(news[1].category, "Calciomercato");
    }

    #[tokio::test]
    async fn test_scoped_prompt_names_category() {
        let oracle = ScriptedOracle::new().respond("ultime 8 notizie", "[]");
        let prompts = oracle.prompts();
        let service = service(oracle);

        assert!(service
            .fetch_news(Some(NavCategory::ChampionsLeague))
            .await
            .is_empty());

        let sent = prompts.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("\"Champions League\""));
    }

    #[test]
    fn test_all_category_uses_general_prompt() {
        assert!(news_prompt(Some(NavCategory::All)).contains("ultime 15 notizie"));
        assert!(news_prompt(Some(NavCategory::National)).contains("\"Nazionali\""));
    }

    #[tokio::test]
    async fn test_every_failure_mode_is_empty() {
        let failing = service(ScriptedOracle::new().fail_all());
        assert!(failing.fetch_news(None).await.is_empty());
        assert!(failing.fetch_live_scores().await.is_empty());
        assert!(failing.fetch_standings("Serie A").await.is_empty());

        let malformed = service(
            ScriptedOracle::new()
                .respond("Risultati calcio", "{not json")
                .respond("classifica", "")
                .respond("notizie", r#"{"title":"oggetto singolo"}"#),
        );
        assert!(malformed.fetch_live_scores().await.is_empty());
        assert!(malformed.fetch_standings("Serie A").await.is_empty());
        assert!(malformed.fetch_news(None).await.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_is_empty() {
        let slow = FootballService::new(
            Arc::new(
                ScriptedOracle::new()
                    .respond("Risultati calcio", r#"[{"home":"Inter","away":"Milan"}]"#)
                    .with_delay(Duration::from_millis(500)),
            ),
            Duration::from_millis(20),
        );

        assert!(slow.fetch_live_scores().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_standings_keeps_order() {
        let service = service(ScriptedOracle::new().respond(
            "classifica",
            r#"[{"position":1,"team":"Napoli","played":30,"points":71},
                {"position":2,"team":"Inter","played":30,"points":68}]"#,
        ));

        let table = service.fetch_standings("Serie A").await;

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].team, "Napoli");
        assert_eq!(table[1].position, 2);
    }
}
