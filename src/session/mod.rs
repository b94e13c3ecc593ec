//! Per-session replay state: cursor, journals, pending deletion.

mod cursor;
mod journal;
mod replay;

pub use cursor::ReplayCursor;
pub use journal::{Journal, JournalKind, PendingDeletion};
pub use replay::{Position, ReplaySession};
