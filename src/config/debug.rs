//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every cursor move (advance/retreat/reset) with the resulting index.
    pub log_replay_nav: bool,

    /// Log journal mutations (append, request/confirm/cancel delete).
    pub log_journal: bool,

    /// Log suggestion re-rolls and their outcome.
    pub log_suggestions: bool,

    /// Log restore/save of persisted UI preferences.
    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_replay_nav: false,
    log_journal: true,
    log_suggestions: true,
    log_persistence: false,
};
