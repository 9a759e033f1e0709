//! `format!`-style logging macros that record the invocation site.
//!
//! # Feature Flags
//! The default-level macros are controlled by cargo features:
//! `log-debug`, `log-info` (also gates SUCCESS), `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macro expands to `()`, removing
//! all formatting and allocation overhead at compile time. [`logger_log!`]
//! is never gated since its level is only known at runtime.

// ============================================================================
// 1. GENERIC MACRO
// ============================================================================

/// Formats the message and dispatches it at `$lvl` with `file!()`/`line!()`.
///
/// Evaluates to the `Result` of
/// [`Logger::dispatch`](crate::log::logger::Logger::dispatch).
#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.dispatch($lvl, file!(), line!(), &__msg)
    }};
}

// ============================================================================
// 2. DEFAULT-LEVEL MACROS (Feature Gated)
// ============================================================================

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::DEBUG, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO / SUCCESS ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::INFO, $($arg)*) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_success { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::SUCCESS, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_success {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::WARN, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::ERROR, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}
