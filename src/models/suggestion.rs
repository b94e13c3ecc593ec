use serde::{Deserialize, Serialize};

use crate::{config::DEMO, models::TradeDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionQuality {
    Good,
    Poor,
}

/// A randomly rolled trade idea for the Automatic tab. Rolled once at
/// session start and again only on explicit request, never per frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TradeSuggestion {
    pub direction: TradeDirection,
    pub risk_reward: f64,
}

impl TradeSuggestion {
    /// Suggestions under 1R aren't worth surfacing at all.
    pub fn is_actionable(&self) -> bool {
        self.risk_reward >= DEMO.suggestion.rr_actionable
    }

    pub fn quality(&self) -> SuggestionQuality {
        if self.risk_reward >= DEMO.suggestion.rr_good {
            SuggestionQuality::Good
        } else {
            SuggestionQuality::Poor
        }
    }
}
