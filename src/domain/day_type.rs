use {
    eframe::egui::Color32,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

use crate::ui::UI_CONFIG;

/// Operator override for the session's market character. Purely contextual,
/// nothing downstream branches on it beyond the sidebar badge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum DayType {
    #[default]
    #[strum(to_string = "Initiative")]
    Initiative,
    #[strum(to_string = "Rotational")]
    Rotational,
    #[strum(to_string = "Neutral")]
    Neutral,
}

impl DayType {
    /// Badge color; Neutral gets no badge at all.
    pub fn badge_color(&self) -> Option<Color32> {
        match self {
            DayType::Initiative => Some(UI_CONFIG.colors.initiative),
            DayType::Rotational => Some(UI_CONFIG.colors.rotational),
            DayType::Neutral => None,
        }
    }
}
