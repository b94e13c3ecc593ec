use {
    serde::{Deserialize, Serialize},
    std::fmt,
    uuid::Uuid,
};

use crate::ui::UI_TEXT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Long,
    Short,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Long => write!(f, "{}", UI_TEXT.label_long),
            TradeDirection::Short => write!(f, "{}", UI_TEXT.label_short),
        }
    }
}

/// One journal row. Opaque to the session core: it is appended, displayed
/// in tabular form, and deleted, never interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub recorded_ms: i64,

    pub symbol: String,
    pub direction: TradeDirection,
    pub price: f64,
    pub quantity: f64,

    pub note: String,
}

impl Trade {
    pub fn new(
        recorded_ms: i64,
        symbol: impl Into<String>,
        direction: TradeDirection,
        price: f64,
        quantity: f64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recorded_ms,
            symbol: symbol.into(),
            direction,
            price,
            quantity,
            note: note.into(),
        }
    }
}
