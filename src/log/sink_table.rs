use std::io::{self, Write};

use crate::log::{
    constants::MAX_SINK_COUNT,
    log_error::LogError,
    log_level::LevelSet,
    log_sink::{SinkEntry, SinkOptions},
};

/// Ordered, append-only list of sinks. Insertion order is dispatch order.
#[derive(Debug, Default)]
pub struct SinkTable<'w> {
    entries: Vec<SinkEntry<'w>>,
}

impl<'w> SinkTable<'w> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a sink.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::CapacityExceeded`] once [`MAX_SINK_COUNT`] sinks are
    /// registered; the table is unchanged in that case.
    pub fn add_sink<W: Write + Send + 'w>(
        &mut self,
        destination: W,
        options: SinkOptions,
        ignored_levels: LevelSet,
    ) -> Result<(), LogError> {
        if self.entries.len() >= MAX_SINK_COUNT {
            return Err(LogError::CapacityExceeded {
                what: "sinks",
                max: MAX_SINK_COUNT,
            });
        }
        self.entries
            .push(SinkEntry::new(destination, options, ignored_levels));
        Ok(())
    }

    /// Flushes every destination, even after a failure.
    ///
    /// Returns the `(index, error)` of each sink whose flush failed.
    pub fn flush_all(&mut self) -> Vec<(usize, io::Error)> {
        self.entries
            .iter_mut()
            .enumerate()
            .filter_map(|(i, sink)| sink.flush().err().map(|e| (i, e)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SinkEntry<'w>> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SinkEntry<'w>> {
        self.entries.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
