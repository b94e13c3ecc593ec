use serde::{Deserialize, Serialize};

// Define the BarType enum
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BarType {
    Bullish,
    Bearish,
}

/// One OHLCV data point for a fixed time interval. Immutable once generated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp_ms: i64,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,

    pub volume: f64,
}

impl Bar {
    // A constructor for convenience
    pub fn new(timestamp_ms: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Bar {
            timestamp_ms,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    // A method to determine the type of bar
    pub fn get_type(&self) -> BarType {
        if self.close >= self.open {
            BarType::Bullish
        } else {
            BarType::Bearish
        }
    }
}
