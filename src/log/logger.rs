use std::{fmt::Display, io::Write};

use crate::log::{
    constants::DIAGNOSTICS_PREFIX,
    level_registry::LevelRegistry,
    log_error::LogError,
    log_level::{DEFAULT_LEVELS, LevelFlag, LevelSet},
    log_sink::SinkOptions,
    sink_table::SinkTable,
};

/// A set of severities plus the sinks every log call fans out to.
///
/// Levels and sinks are append-only: once registered they are never removed
/// or reordered. The `'w` lifetime bounds borrowed destinations (for example
/// `&mut Vec<u8>`); owned ones (`File`, `Stdout`) are dropped, and therefore
/// closed, together with the logger.
///
/// # Threading
///
/// Dispatch keeps all of its scratch text in locals, but writing needs
/// `&mut self`. A `Logger` is `Send`; share it between threads by wrapping it
/// in a `Mutex`.
///
/// # Example
///
/// ```rust,ignore
/// use rustylog::log::{log_level::{DEBUG, WARN}, log_sink::SinkOptions, logger::Logger};
///
/// let mut logger = Logger::with_defaults();
/// logger.add_stream(std::io::stdout(), SinkOptions::COLOR, DEBUG.into())?;
/// logger.log(WARN, "disk almost full")?;
/// ```
#[derive(Debug)]
pub struct Logger<'w> {
    pub(super) levels: LevelRegistry,
    pub(super) sinks: SinkTable<'w>,
    diagnostics: bool,
}

impl Default for Logger<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'w> Logger<'w> {
    /// An empty logger: no levels, no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: LevelRegistry::new(),
            sinks: SinkTable::new(),
            diagnostics: true,
        }
    }

    /// A logger with WARN, ERROR, INFO, SUCCESS and DEBUG registered, so their
    /// flags equal the constants in [`log_level`](crate::log::log_level).
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut logger = Self::new();
        for (name, color) in DEFAULT_LEVELS {
            let added = logger.levels.add_level(name, color);
            debug_assert!(added.is_ok(), "default level {name} rejected: {added:?}");
        }
        logger
    }

    /// Registers a new level; see [`LevelRegistry::add_level`].
    ///
    /// # Errors
    ///
    /// Propagates the registry error after reporting it on stderr.
    pub fn add_level(&mut self, name: &str, color_code: &str) -> Result<LevelFlag, LogError> {
        self.levels
            .add_level(name, color_code)
            .inspect_err(|e| self.report(e))
    }

    /// Adds a destination that receives every line whose level is not in
    /// `ignored_levels`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::CapacityExceeded`] when the sink table is full.
    pub fn add_stream<W: Write + Send + 'w>(
        &mut self,
        destination: W,
        options: SinkOptions,
        ignored_levels: LevelSet,
    ) -> Result<(), LogError> {
        self.sinks
            .add_sink(destination, options, ignored_levels)
            .inspect_err(|e| self.report(e))
    }

    /// Turns the stderr diagnostics channel on or off. On by default.
    pub fn set_diagnostics(&mut self, enabled: bool) {
        self.diagnostics = enabled;
    }

    #[must_use]
    pub fn levels(&self) -> &LevelRegistry {
        &self.levels
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Flushes every sink. Failures are reported on stderr and the first one
    /// is returned, after all sinks have been flushed.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error encountered.
    pub fn flush(&mut self) -> std::io::Result<()> {
        let mut failures = self.sinks.flush_all().into_iter();
        let first = failures.next();
        if let Some((index, err)) = &first {
            self.report(format_args!("flush of sink #{index} failed: {err}"));
        }
        for (index, err) in failures {
            self.report(format_args!("flush of sink #{index} failed: {err}"));
        }
        first.map_or(Ok(()), |(_, err)| Err(err))
    }

    /// Writes one human-readable line to stderr, unless diagnostics are off.
    pub(super) fn report(&self, what: impl Display) {
        if self.diagnostics {
            eprintln!("{DIAGNOSTICS_PREFIX} {what}");
        }
    }
}
