//! Configuration module for the replay-desk application.

mod debug;
mod demo;

pub use debug::DF;
pub use demo::{DEMO, DemoConfig, FeedConfig, SuggestionConfig};
