use std::{io, panic::Location};

use crate::log::{
    constants::MAX_MESSAGE_LEN,
    formatter::{render_level_tag, render_line, render_timestamp},
    log_error::LogError,
    log_level::LevelFlag,
    logger::Logger,
};

/// A sink whose write failed during one dispatch.
#[derive(Debug)]
pub struct SinkWriteFailure {
    /// Position of the sink in registration order.
    pub sink_index: usize,
    pub error: io::Error,
}

/// Outcome of one dispatch that passed validation.
///
/// Write failures do not stop the fan-out: every remaining sink is still
/// tried, and each failure is collected here.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub written: usize,
    pub suppressed: usize,
    pub failures: Vec<SinkWriteFailure>,
}

impl DispatchReport {
    /// True when no sink failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Logger<'_> {
    /// Logs `message` at `level`, tagging it with the caller's file and line.
    ///
    /// # Errors
    ///
    /// Same as [`dispatch`](Self::dispatch).
    #[track_caller]
    pub fn log(&mut self, level: LevelFlag, message: &str) -> Result<DispatchReport, LogError> {
        let caller = Location::caller();
        self.dispatch(level, caller.file(), caller.line(), message)
    }

    /// Resolves `level`, stamps the current local time once, and writes the line
    /// to every sink that does not ignore `level`, in registration order.
    ///
    /// # Errors
    ///
    /// * [`LogError::NullArgument`] if `file` or `message` is empty.
    /// * [`LogError::MessageTooLong`] if `message` exceeds [`MAX_MESSAGE_LEN`] bytes.
    /// * [`LogError::LevelNotFound`] if no registered level carries `level`.
    ///
    /// No sink is touched when an error is returned.
    pub fn dispatch(
        &mut self,
        level: LevelFlag,
        file: &str,
        line: u32,
        message: &str,
    ) -> Result<DispatchReport, LogError> {
        self.validate(file, message).inspect_err(|e| self.report(e))?;
        let timestamp = render_timestamp();
        self.fan_out(level, file, line, message, &timestamp)
    }

    /// Like [`dispatch`](Self::dispatch), with a caller-supplied timestamp
    /// instead of the local clock.
    ///
    /// # Errors
    ///
    /// As [`dispatch`](Self::dispatch), plus [`LogError::NullArgument`] for an
    /// empty `timestamp`.
    pub fn dispatch_at(
        &mut self,
        level: LevelFlag,
        file: &str,
        line: u32,
        message: &str,
        timestamp: &str,
    ) -> Result<DispatchReport, LogError> {
        let checked = if timestamp.is_empty() {
            Err(LogError::NullArgument("timestamp"))
        } else {
            self.validate(file, message)
        };
        checked.inspect_err(|e| self.report(e))?;
        self.fan_out(level, file, line, message, timestamp)
    }

    fn validate(&self, file: &str, message: &str) -> Result<(), LogError> {
        if file.is_empty() {
            return Err(LogError::NullArgument("file"));
        }
        if message.is_empty() {
            return Err(LogError::NullArgument("message"));
        }
        if message.len() > MAX_MESSAGE_LEN {
            return Err(LogError::MessageTooLong {
                len: message.len(),
                max: MAX_MESSAGE_LEN,
            });
        }
        Ok(())
    }

    fn fan_out(
        &mut self,
        level: LevelFlag,
        file: &str,
        line: u32,
        message: &str,
        timestamp: &str,
    ) -> Result<DispatchReport, LogError> {
        let Some(level_data) = self.levels.resolve(level) else {
            let err = LogError::LevelNotFound(level);
            self.report(&err);
            return Err(err);
        };

        let mut report = DispatchReport::default();
        // The colored and plain lines differ only in the tag; build each lazily, once.
        let mut plain_line: Option<String> = None;
        let mut color_line: Option<String> = None;

        for (sink_index, sink) in self.sinks.iter_mut().enumerate() {
            if sink.is_suppressed(level) {
                report.suppressed += 1;
                continue;
            }
            let color = sink.color_enabled();
            let slot = if color { &mut color_line } else { &mut plain_line };
            let text = slot.get_or_insert_with(|| {
                let tag = render_level_tag(level_data, color);
                render_line(timestamp, file, line, &tag, message)
            });

            match sink.write_line(text) {
                Ok(()) => report.written += 1,
                Err(error) => report.failures.push(SinkWriteFailure { sink_index, error }),
            }
        }

        for failure in &report.failures {
            self.report(format_args!(
                "write to sink #{} failed: {}",
                failure.sink_index, failure.error
            ));
        }
        Ok(report)
    }
}
