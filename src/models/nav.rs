use serde::{Deserialize, Serialize};

/// External live scores page linked from the home screen
pub const LIVE_SCORES_URL: &str = "https://www.diretta.it";

/// Navigation sections of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavCategory {
    SerieA,
    SerieB,
    ChampionsLeague,
    EuropaLeague,
    CoppaItalia,
    /// National teams; has no league table
    National,
    /// Catch-all feed; has no league table
    All,
}

impl NavCategory {
    /// Entries shown in the navigation menu, in display order
    pub const MENU: [NavCategory; 6] = [
        NavCategory::SerieA,
        NavCategory::SerieB,
        NavCategory::ChampionsLeague,
        NavCategory::EuropaLeague,
        NavCategory::CoppaItalia,
        NavCategory::National,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavCategory::SerieA => "Serie A",
            NavCategory::SerieB => "Serie B",
            NavCategory::ChampionsLeague => "Champions League",
            NavCategory::EuropaLeague => "Europa League",
            NavCategory::CoppaItalia => "Coppa Italia",
            NavCategory::National => "Nazionali",
            NavCategory::All => "Tutte",
        }
    }

    /// Whether opening this section also loads a standings table
    pub fn has_standings(&self) -> bool {
        !matches!(self, NavCategory::National | NavCategory::All)
    }

    /// Whether news for this section is requested with a scoped prompt
    pub fn is_scoped(&self) -> bool {
        !matches!(self, NavCategory::All)
    }

    /// Look up a section by its display label (case-insensitive)
    pub fn parse_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::MENU
            .iter()
            .chain(std::iter::once(&NavCategory::All))
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }

    /// Category given to admin drafts when none is chosen
    pub fn default_draft() -> Self {
        Self::MENU[0]
    }
}

impl std::fmt::Display for NavCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_capability() {
        assert!(NavCategory::SerieA.has_standings());
        assert!(NavCategory::CoppaItalia.has_standings());
        assert!(!NavCategory::National.has_standings());
        assert!(!NavCategory::All.has_standings());
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(NavCategory::parse_label("serie a"), Some(NavCategory::SerieA));
        assert_eq!(NavCategory::parse_label(" Nazionali "), Some(NavCategory::National));
        assert_eq!(NavCategory::parse_label("Tutte"), Some(NavCategory::All));
        assert_eq!(NavCategory::parse_label("Calciomercato"), None);
    }
}
