mod journal;
mod overview;
mod replay;
mod sidebar;
mod styles;
mod suggestion;
mod ui_config;
mod ui_render;
mod ui_text;

pub use ui_config::{UI_CONFIG, UiConfig};
pub use ui_text::{UI_TEXT, UiText};
