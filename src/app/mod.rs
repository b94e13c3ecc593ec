mod root;
mod state;

pub(crate) use state::ActiveTab;

pub use root::App;
