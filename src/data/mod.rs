mod synthetic;

pub use synthetic::{generate_bars, random_suggestion, session_rng};
