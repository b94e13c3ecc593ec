#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use domain::Bar;
pub use session::{JournalKind, ReplaySession};

// CLI argument parsing
use clap::Parser;

use crate::config::DEMO;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of synthetic bars to generate for the session
    #[arg(long, default_value_t = DEMO.feed.bar_count)]
    pub bars: usize,

    /// Seed for the session RNG (reproducible feed + suggestions)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Symbol shown in the header, overriding the persisted one
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
