use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::log::constants::{
    BLUE, CYAN, DEBUG_NAME, ERROR_NAME, GREEN, INFO_NAME, MAX_LEVEL_COUNT, RED, SUCCESS_NAME,
    WARN_NAME, YELLOW,
};

/// Identifies one severity level as a single bit.
///
/// Flags handed out by a [`LevelRegistry`](crate::log::level_registry::LevelRegistry)
/// always have exactly one bit set. [`LevelFlag::NONE`] is the sentinel that
/// never resolves to a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct LevelFlag(u64);

impl LevelFlag {
    /// "No such level".
    pub const NONE: Self = Self(0);

    /// Flag for the level stored at `index` in a registry.
    ///
    /// Returns `None` when `index` does not fit in the 64-bit flag space.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < MAX_LEVEL_COUNT {
            Some(Self(1 << index))
        } else {
            None
        }
    }

    /// Wraps raw bits without checking them.
    ///
    /// Useful when a flag arrives from outside (a config value, an FFI caller);
    /// a value that is zero or has several bits set simply fails to resolve.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True for a well-formed flag: exactly one bit set.
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.0.is_power_of_two()
    }
}

/// A set of level flags, used for ignore-masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct LevelSet(u64);

impl LevelSet {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `self & flag != 0`, the suppression test applied by every sink.
    #[must_use]
    pub const fn contains(self, flag: LevelFlag) -> bool {
        self.0 & flag.0 != 0
    }

    #[must_use]
    pub const fn with(self, flag: LevelFlag) -> Self {
        Self(self.0 | flag.0)
    }
}

impl From<LevelFlag> for LevelSet {
    fn from(flag: LevelFlag) -> Self {
        Self(flag.0)
    }
}

impl BitOr for LevelFlag {
    type Output = LevelSet;

    fn bitor(self, rhs: Self) -> LevelSet {
        LevelSet(self.0 | rhs.0)
    }
}

impl BitOr<LevelFlag> for LevelSet {
    type Output = LevelSet;

    fn bitor(self, rhs: LevelFlag) -> LevelSet {
        self.with(rhs)
    }
}

impl BitOr for LevelSet {
    type Output = LevelSet;

    fn bitor(self, rhs: Self) -> LevelSet {
        LevelSet(self.0 | rhs.0)
    }
}

impl BitOrAssign<LevelFlag> for LevelSet {
    fn bitor_assign(&mut self, rhs: LevelFlag) {
        self.0 |= rhs.0;
    }
}

impl BitAnd<LevelFlag> for LevelSet {
    type Output = LevelSet;

    fn bitand(self, rhs: LevelFlag) -> LevelSet {
        LevelSet(self.0 & rhs.0)
    }
}

/// Display data of a registered severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// Text printed inside the brackets of every line.
    pub name: String,
    /// Escape sequence written before `name` on color-enabled sinks.
    pub color_code: String,
    pub flag: LevelFlag,
}

impl Level {
    pub(crate) fn new(name: &str, color_code: &str, flag: LevelFlag) -> Self {
        Self {
            name: name.to_owned(),
            color_code: color_code.to_owned(),
            flag,
        }
    }
}

// Flags of the default levels, in the order `Logger::with_defaults` registers them.
pub const WARN: LevelFlag = LevelFlag(1 << 0);
pub const ERROR: LevelFlag = LevelFlag(1 << 1);
pub const INFO: LevelFlag = LevelFlag(1 << 2);
pub const SUCCESS: LevelFlag = LevelFlag(1 << 3);
pub const DEBUG: LevelFlag = LevelFlag(1 << 4);
pub const ALL_LEVELS: LevelSet = LevelSet(WARN.0 | ERROR.0 | INFO.0 | SUCCESS.0 | DEBUG.0);

/// `(name, color)` of the default levels; position `i` receives flag `1 << i`.
pub const DEFAULT_LEVELS: [(&str, &str); 5] = [
    (WARN_NAME, YELLOW),
    (ERROR_NAME, RED),
    (INFO_NAME, BLUE),
    (SUCCESS_NAME, GREEN),
    (DEBUG_NAME, CYAN),
];
