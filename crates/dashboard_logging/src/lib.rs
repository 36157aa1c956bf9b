#![deny(missing_docs)]
//! Shared logging utilities for the dashboard workspace.
//!
//! This crate provides the `dash_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

use std::cell::RefCell;

thread_local! {
    /// Session tag of the interaction currently handled on this thread.
    static SESSION_TAG: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Marks the current thread as working on behalf of one session.
///
/// The previous tag is restored when the returned guard is dropped, so scopes nest.
pub fn enter_session(tag: impl Into<String>) -> SessionScope {
    let previous = SESSION_TAG.with(|cell| cell.replace(Some(tag.into())));
    SessionScope { previous }
}

/// Returns the session tag active on this thread, if any.
pub fn current_session() -> Option<String> {
    SESSION_TAG.with(|cell| cell.borrow().clone())
}

/// Guard returned by [`enter_session`].
#[must_use = "the session tag is cleared as soon as the scope is dropped"]
pub struct SessionScope {
    previous: Option<String>,
}

impl Drop for SessionScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        SESSION_TAG.with(|cell| *cell.borrow_mut() = previous);
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dash_log {
    ($level:ident, $($arg:tt)*) => {{
        match $crate::current_session() {
            Some(tag) => log::$level!("[session {}] {}", tag, format_args!($($arg)*)),
            None => log::$level!($($arg)*),
        }
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! dash_info {
    ($($arg:tt)*) => {{
        $crate::__dash_log!(info, $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! dash_debug {
    ($($arg:tt)*) => {{
        $crate::__dash_log!(debug, $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! dash_warn {
    ($($arg:tt)*) => {{
        $crate::__dash_log!(warn, $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! dash_error {
    ($($arg:tt)*) => {{
        $crate::__dash_log!(error, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_scopes_nest_and_restore() {
        assert_eq!(current_session(), None);
        {
            let _outer = enter_session("a");
            assert_eq!(current_session().as_deref(), Some("a"));
            {
                let _inner = enter_session("b");
                assert_eq!(current_session().as_deref(), Some("b"));
            }
            assert_eq!(current_session().as_deref(), Some("a"));
        }
        assert_eq!(current_session(), None);
    }
}
