//! Scoped suppression of library log output.
//!
//! `tokenizers` and `hf-hub` log through the `log` facade, whose max level is
//! process-global. Loading a tokenizer caps it for the duration of the load.

use log::LevelFilter;

/// Caps the global `log` max level while alive; the previous level is put
/// back when the guard drops, including during a panic unwind.
#[must_use = "the previous log level is restored as soon as the guard is dropped"]
pub struct LogLevelGuard {
    previous: LevelFilter,
}

impl LogLevelGuard {
    /// Lower the global max level to `level`. A stricter current level is left alone.
    pub fn cap(level: LevelFilter) -> Self {
        let previous = log::max_level();
        if previous > level {
            log::set_max_level(level);
        }
        Self { previous }
    }
}

impl Drop for LogLevelGuard {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Run `f` with logging capped at `level`.
pub fn with_log_level<T>(level: LevelFilter, f: impl FnOnce() -> T) -> T {
    let _guard = LogLevelGuard::cap(level);
    f()
}
