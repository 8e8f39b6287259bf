use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::fixtures::key_at;
use crate::models::{Match, MatchKey};

/// A 1X2 pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "1")]
    Home,
    #[serde(rename = "X")]
    Draw,
    #[serde(rename = "2")]
    Away,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Home => "1",
            Outcome::Draw => "X",
            Outcome::Away => "2",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown outcome {0:?}, expected 1, X or 2")]
pub struct ParseOutcomeError(String);

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Outcome::Home),
            "X" | "x" => Ok(Outcome::Draw),
            "2" => Ok(Outcome::Away),
            other => Err(ParseOutcomeError(other.to_string())),
        }
    }
}

/// Recorded picks, one per fixture, last write wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predictions {
    picks: HashMap<MatchKey, Outcome>,
}

impl Predictions {
    pub fn record(&mut self, key: MatchKey, outcome: Outcome) {
        self.picks.insert(key, outcome);
    }

    pub fn get(&self, key: &MatchKey) -> Option<Outcome> {
        self.picks.get(key).copied()
    }

    /// Pick for the match currently shown at `index`
    pub fn for_index(&self, matches: &[Match], index: usize) -> Option<Outcome> {
        key_at(matches, index).and_then(|key| self.get(&key))
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
