//! rustylog is a small leveled logger that fans every call out to any number of
//! sinks.
//!
//! Each sink has its own ignore-mask (which severities it drops) and its own
//! color switch. Severities are registered at runtime and identified by single
//! bit flags, so ignore-masks are plain bitwise ORs.
//!
//! Lines look like:
//!
//! ```text
//! 2025-11-02 02:30:45 src/main.rs:12 [WARN] - disk almost full
//! ```

/// INI-style configuration loading.
pub mod config;
/// Errors raised while turning a configuration into a logger.
pub mod config_error;
/// Level registry, sinks, formatting and dispatch.
pub mod log;
