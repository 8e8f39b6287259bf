//! Coercion of untrusted Oracle output into typed records.
//!
//! The Oracle is asked for a JSON array but may wrap it in a Markdown fence,
//! nest it under an object key, or return records with missing or mistyped
//! fields. Identifying fields are required; everything else is defaulted.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{Match, RawNews, StandingsRow};

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an array of records, found {0}")]
    NotAnArray(&'static str),
}

/// Parse Oracle text into a list of JSON records
pub fn parse_records(text: &str) -> Result<Vec<Value>, PayloadError> {
    let value: Value = serde_json::from_str(strip_code_fence(text))?;

    match value {
        Value::Array(items) => Ok(items),
        Value::Object(map) => records_in_object(map).ok_or(PayloadError::NotAnArray("object")),
        other => Err(PayloadError::NotAnArray(kind(&other))),
    }
}

/// The array field holding the most objects; sibling arrays of plain
/// values (`categories`, `sources`, ...) lose to it regardless of key order.
fn records_in_object(map: Map<String, Value>) -> Option<Vec<Value>> {
    let mut best: Option<(usize, Vec<Value>)> = None;

    for (_, value) in map {
        let Value::Array(items) = value else {
            continue;
        };
        let objects = items.iter().filter(|v| v.is_object()).count();
        if best.as_ref().map_or(true, |(count, _)| objects > *count) {
            best = Some((objects, items));
        }
    }

    best.map(|(_, items)| items)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") on the opening fence line
    let body = rest.split_once('\n').map(|(_, b)| b).unwrap_or("");
    body.trim_end().trim_end_matches("```").trim()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn news_from_value(value: &Value) -> Option<RawNews> {
    let obj = value.as_object()?;

    Some(RawNews {
        title: text_field(obj, "title")?,
        category: text_field(obj, "category").unwrap_or_default(),
        summary: text_field(obj, "summary").unwrap_or_default(),
        url: text_field(obj, "url"),
        image: text_field(obj, "image"),
        time: text_field(obj, "time").unwrap_or_default(),
    })
}

pub fn match_from_value(value: &Value) -> Option<Match> {
    let obj = value.as_object()?;

    Some(Match {
        home: text_field(obj, "home")?,
        away: text_field(obj, "away")?,
        score: text_field(obj, "score").unwrap_or_else(|| "-".to_string()),
        status: text_field(obj, "status").unwrap_or_default(),
        league: text_field(obj, "league").unwrap_or_default(),
    })
}

pub fn standings_from_value(value: &Value) -> Option<StandingsRow> {
    let obj = value.as_object()?;

    Some(StandingsRow {
        position: count_field(obj, "position").filter(|p| *p > 0)?,
        team: text_field(obj, "team")?,
        played: count_field(obj, "played").unwrap_or(0),
        points: int_field(obj, "points").unwrap_or(0),
    })
}

/// Non-empty trimmed string; numbers are accepted and stringified
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match obj.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    (!text.is_empty()).then_some(text)
}

fn int_field(obj: &Map<String, Value>, key: &str) -> Option<i32> {
    let n = match obj.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    n.is_finite()
        .then(|| n.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}

/// Non-negative integer; negatives clamp to 0
fn count_field(obj: &Map<String, Value>, key: &str) -> Option<u32> {
    int_field(obj, key).map(|n| n.max(0) as u32)
}
