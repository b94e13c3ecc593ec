use chrono::{DateTime, Local};

pub const MS_IN_S: i64 = 1000;
pub const MS_IN_MIN: i64 = MS_IN_S * 60;
pub const MS_IN_H: i64 = MS_IN_MIN * 60;
pub const MS_IN_D: i64 = MS_IN_H * 24;

pub const BAR_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_timestamp_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Wall-clock string for the sidebar clock.
pub fn local_now_string() -> String {
    format!("{}", Local::now().format(CLOCK_FORMAT))
}

// Display purposes only
pub fn epoch_ms_to_datetime_string(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => format!("{}", dt.format(BAR_TIME_FORMAT)),
        None => "invalid time".to_string(),
    }
}

pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}
