mod suggestion;
mod trade;

pub use suggestion::{SuggestionQuality, TradeSuggestion};
pub use trade::{Trade, TradeDirection};
