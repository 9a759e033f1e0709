use std::{
    fmt,
    io::{self, Write},
    ops::BitOr,
};

use crate::log::log_level::{LevelFlag, LevelSet};

/// Per-sink option bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SinkOptions(u64);

impl SinkOptions {
    pub const DEFAULT: Self = Self(0);
    /// Wrap level tags in the level's ANSI color.
    pub const COLOR: Self = Self(1 << 5);

    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SinkOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One configured destination: where to write, how to decorate, what to skip.
pub struct SinkEntry<'w> {
    destination: Box<dyn Write + Send + 'w>,
    options: SinkOptions,
    ignored_levels: LevelSet,
}

impl<'w> SinkEntry<'w> {
    pub fn new<W: Write + Send + 'w>(
        destination: W,
        options: SinkOptions,
        ignored_levels: LevelSet,
    ) -> Self {
        Self {
            destination: Box::new(destination),
            options,
            ignored_levels,
        }
    }

    /// `ignored_levels & flag != 0`.
    #[inline]
    #[must_use]
    pub fn is_suppressed(&self, flag: LevelFlag) -> bool {
        self.ignored_levels.contains(flag)
    }

    #[inline]
    #[must_use]
    pub fn color_enabled(&self) -> bool {
        self.options.contains(SinkOptions::COLOR)
    }

    #[must_use]
    pub fn options(&self) -> SinkOptions {
        self.options
    }

    #[must_use]
    pub fn ignored_levels(&self) -> LevelSet {
        self.ignored_levels
    }

    /// Writes one fully composed line; partial writes are retried by `write_all`.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.destination.write_all(line.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.destination.flush()
    }
}

impl fmt::Debug for SinkEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkEntry")
            .field("options", &self.options)
            .field("ignored_levels", &self.ignored_levels)
            .finish_non_exhaustive()
    }
}
