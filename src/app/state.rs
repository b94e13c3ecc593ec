// src/app/state.rs

use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Which of the three dashboard tabs is showing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub(crate) enum ActiveTab {
    #[default]
    #[strum(to_string = "🤖 Automatic")]
    Automatic,
    #[strum(to_string = "🎮 Manual")]
    Manual,
    #[strum(to_string = "🧠 Combined")]
    Combined,
}
