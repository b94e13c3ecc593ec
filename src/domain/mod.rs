mod bar;
mod day_type;

pub use bar::{Bar, BarType};
pub use day_type::DayType;
