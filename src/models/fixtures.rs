use serde::{Deserialize, Serialize};

/// A match from the live scores feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Home team name
    pub home: String,

    /// Away team name
    pub away: String,

    /// Display score (e.g. "2 - 1")
    pub score: String,

    /// Display status: elapsed minutes, "Intervallo", "Terminata", ...
    pub status: String,

    /// Competition name
    pub league: String,
}

impl Match {
    /// Key of the first occurrence of this fixture
    pub fn key(&self) -> MatchKey {
        MatchKey {
            home: self.home.to_lowercase(),
            away: self.away.to_lowercase(),
            league: self.league.to_lowercase(),
            occurrence: 0,
        }
    }
}

/// Stable identity of a fixture, used to key predictions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchKey {
    pub home: String,
    pub away: String,
    pub league: String,
    /// How many identical fixtures precede this one in the list
    pub occurrence: usize,
}

/// Key of the match shown at `index`, telling repeated fixtures apart
pub fn key_at(matches: &[Match], index: usize) -> Option<MatchKey> {
    let mut key = matches.get(index)?.key();
    key.occurrence = matches[..index].iter().filter(|m| m.key() == key).count();
    Some(key)
}

/// One row of a league table, in the order the Oracle returned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based rank
    pub position: u32,
    pub team: String,
    pub played: u32,
    pub points: i32,
}
