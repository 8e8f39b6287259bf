//! Line-oriented console front end: parses commands into actions and
//! renders a plain-text view of the current screen.

use std::fmt::Write as _;

use thiserror::Error;

use crate::app::action::Action;
use crate::app::state::{AppState, Rejection, Screen};
use crate::models::nav::LIVE_SCORES_URL;
use crate::models::{ArticleId, NavCategory, NewsItem, Outcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, type `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("no article at position {0}")]
    NoSuchArticle(usize),

    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    #[error("open the form first with `new` or `edit ID`")]
    NoDraft,
}

pub const HELP: &str = "\
home | open N | cat LABEL | search TEXT | fan | predict [N 1|X|2] | slide N
admin | new | edit ID | title/category/summary/image TEXT | save | cancel
delete ID | video URL | help | quit";

/// Parse one input line against the current state
pub fn parse_command(line: &str, state: &AppState) -> Result<Command, CommandError> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(v, r)| (v, r.trim()))
        .unwrap_or((line, ""));

    let action = match verb.to_lowercase().as_str() {
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "home" | "back" => Action::GoHome,
        "fan" => Action::OpenFanZone,
        "admin" => Action::OpenDashboard,
        "new" => Action::OpenNewDraft,
        "save" => Action::SubmitDraft,
        "cancel" => Action::CancelDraft,
        "search" => Action::Search(rest.to_string()),
        "video" => Action::SetFeaturedVideo(rest.to_string()),
        "open" => {
            let index = parse_number(rest, "open N")?;
            let article = state
                .listed_articles()
                .get(index)
                .cloned()
                .ok_or(CommandError::NoSuchArticle(index))?;
            Action::OpenArticle(article)
        }
        "cat" => {
            let category = NavCategory::parse_label(rest)
                .ok_or_else(|| CommandError::UnknownCategory(rest.to_string()))?;
            Action::OpenCategory(category)
        }
        "slide" => Action::SelectSlide(parse_number(rest, "slide N")?),
        "edit" => Action::OpenEditDraft(ArticleId(parse_number(rest, "edit ID")? as u64)),
        "delete" => Action::DeleteArticle(ArticleId(parse_number(rest, "delete ID")? as u64)),
        "predict" if rest.is_empty() => Action::OpenPredictions,
        "predict" => {
            const USAGE: &str = "predict N 1|X|2";
            let (index, pick) = rest.split_once(' ').ok_or(CommandError::Usage(USAGE))?;
            Action::Predict {
                match_index: parse_number(index, USAGE)?,
                outcome: pick.parse::<Outcome>().map_err(|_| CommandError::Usage(USAGE))?,
            }
        }
        field @ ("title" | "category" | "summary" | "image") => {
            let mut draft = state.admin.draft.clone().ok_or(CommandError::NoDraft)?;
            let value = rest.to_string();
            match field {
                "title" => draft.title = value,
                "category" => draft.category = value,
                "summary" => draft.summary = value,
                _ => draft.image = value,
            }
            Action::EditDraft(draft)
        }
        _ => return Err(CommandError::Unknown(verb.to_string())),
    };

    Ok(Command::Dispatch(action))
}

fn parse_number(text: &str, usage: &'static str) -> Result<usize, CommandError> {
    text.trim().parse().map_err(|_| CommandError::Usage(usage))
}

/// Plain-text rendering of the current screen
pub fn render(state: &AppState) -> String {
    let mut out = String::new();

    if let Some(rejection) = state.last_rejection {
        let reason = match rejection {
            Rejection::Draft(e) => e.to_string(),
            Rejection::MissingArticle(id) => format!("article {} no longer exists", id),
            Rejection::EmptyVideoUrl => "video URL is required".to_string(),
        };
        let _ = writeln!(out, "! {}", reason);
    }

    match &state.screen {
        Screen::Home => render_home(state, &mut out),
        Screen::Article(article) => {
            let _ = writeln!(out, "[{}] {}", article.category, article.title);
            let _ = writeln!(out, "{} | {} views", article.time, article.views);
            let _ = writeln!(out, "{}", article.image);
            let _ = writeln!(out, "\n{}", article.summary);
            if let Some(url) = &article.url {
                let _ = writeln!(out, "\nFonte: {}", url);
            }
        }
        Screen::Category(view) => {
            let _ = writeln!(out, "== {} ==", view.category);
            if view.news_loading {
                let _ = writeln!(out, "Caricamento notizie...");
            } else {
                render_list(&view.news, &mut out);
            }
            if view.category.has_standings() {
                let _ = writeln!(out, "-- Classifica --");
                if view.standings_loading {
                    let _ = writeln!(out, "Caricamento classifica...");
                } else if view.standings.is_empty() {
                    let _ = writeln!(out, "Classifica non disponibile");
                }
                for row in &view.standings {
                    let _ = writeln!(
                        out,
                        "{:>2}. {:<20} {:>3} {:>4}",
                        row.position, row.team, row.played, row.points
                    );
                }
            }
        }
        Screen::Search { query, results } => {
            let _ = writeln!(out, "Risultati per {:?}: {} articoli", query, results.len());
            render_list(results, &mut out);
        }
        Screen::FanZone => {
            let _ = writeln!(out, "== Fan Zone ==");
        }
        Screen::Predictions => {
            let _ = writeln!(out, "== Pronostici ==");
            for (i, m) in state.matches.iter().enumerate() {
                let pick = state
                    .predictions
                    .for_index(&state.matches, i)
                    .map(|o| o.as_str())
                    .unwrap_or("-");
                let _ = writeln!(out, "{:>2}. {} - {} ({}) [{}]", i, m.home, m.away, m.league, pick);
            }
        }
        Screen::Dashboard => render_dashboard(state, &mut out),
    }

    out
}

fn render_home(state: &AppState, out: &mut String) {
    if state.loading {
        let _ = writeln!(out, "Caricamento...");
        return;
    }

    match state.current_slide() {
        Some(slide) => {
            let _ = writeln!(out, ">> {} [{}]", slide.title, slide.category);
        }
        None => {
            let _ = writeln!(out, "Nessuna notizia disponibile");
        }
    }

    render_list(state.articles.as_slice(), out);

    let _ = writeln!(out, "-- Risultati ({}) --", LIVE_SCORES_URL);
    for m in &state.matches {
        let _ = writeln!(out, "{} {} {} [{}] {}", m.home, m.score, m.away, m.status, m.league);
    }
    let _ = writeln!(out, "Video: {}", state.featured_video);
}

fn render_dashboard(state: &AppState, out: &mut String) {
    let stats = state.articles.stats();
    let _ = writeln!(
        out,
        "== Admin == {} articoli pubblicati, {} visualizzazioni",
        stats.published, stats.total_views
    );
    let _ = writeln!(out, "Video home: {}", state.featured_video);

    for article in state.articles.iter() {
        let _ = writeln!(
            out,
            "#{:<4} {:<40} {:<18} {:>5} {}",
            article.id,
            article.title,
            article.category,
            article.views,
            article.state.label()
        );
    }

    if let Some(draft) = &state.admin.draft {
        let heading = match state.admin.editing {
            Some(id) => format!("Modifica #{}", id),
            None => "Nuovo articolo".to_string(),
        };
        let _ = writeln!(out, "-- {} --", heading);
        let _ = writeln!(out, "title:    {}", draft.title);
        let _ = writeln!(out, "category: {}", draft.category);
        let _ = writeln!(out, "summary:  {}", draft.summary);
        let _ = writeln!(out, "image:    {}", draft.image);
    }
}

fn render_list(items: &[NewsItem], out: &mut String) {
    if items.is_empty() {
        let _ = writeln!(out, "Nessun articolo");
    }
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. [{}] {} ({})", i, item.category, item.title, item.time);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::app::reducer::reduce;
    use crate::models::RawNews;

    fn loaded() -> AppState {
        reduce(
            AppState::default(),
            Action::StartupLoaded {
                news: vec![RawNews {
                    title: "Derby".to_string(),
                    category: "Serie A".to_string(),
                    ..Default::default()
                }],
                matches: Vec::new(),
                fetched_at: Utc::now(),
            },
        )
        .state
    }

    #[test]
    fn test_parse_navigation() {
        let state = loaded();

        assert_eq!(
            parse_command("cat champions league", &state),
            Ok(Command::Dispatch(Action::OpenCategory(NavCategory::ChampionsLeague)))
        );
        assert_eq!(
            parse_command("predict 2 x", &state),
            Ok(Command::Dispatch(Action::Predict {
                match_index: 2,
                outcome: Outcome::Draw
            }))
        );
        assert_eq!(
            parse_command("predict", &state),
            Ok(Command::Dispatch(Action::OpenPredictions))
        );
        assert!(matches!(
            parse_command("open 0", &state),
            Ok(Command::Dispatch(Action::OpenArticle(a))) if a.title == "Derby"
        ));
        assert_eq!(
            parse_command("open 4", &state),
            Err(CommandError::NoSuchArticle(4))
        );
        assert_eq!(parse_command("quit", &state), Ok(Command::Quit));
    }

    #[test]
    fn test_draft_fields_need_open_form() {
        let state = loaded();
        assert_eq!(
            parse_command("title Nuovo", &state),
            Err(CommandError::NoDraft)
        );

        let state = reduce(reduce(state, Action::OpenDashboard).state, Action::OpenNewDraft).state;
        match parse_command("title Nuovo titolo", &state) {
            Ok(Command::Dispatch(Action::EditDraft(draft))) => {
                assert_eq!(draft.title, "Nuovo titolo");
                assert_eq!(draft.category, "Serie A");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_render_home_and_loading() {
        assert!(render(&AppState::default()).contains("Caricamento"));

        let home = render(&loaded());
        assert!(home.contains(">> Derby"));
        assert!(home.contains(LIVE_SCORES_URL));
    }
}
