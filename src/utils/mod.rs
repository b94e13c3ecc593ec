mod time_utils;

pub use time_utils::{
    BAR_TIME_FORMAT, CLOCK_FORMAT, MS_IN_D, MS_IN_H, MS_IN_MIN, MS_IN_S,
    epoch_ms_to_datetime_string, format_price, local_now_string, now_timestamp_ms,
};
