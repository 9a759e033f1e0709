use crate::log::log_level::LevelFlag;
use std::fmt;

/// Failures reported by level registration, sink registration and dispatch.
///
/// None of these are fatal: the logger stays usable and unchanged after any of
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The level registry or the sink table is full.
    CapacityExceeded { what: &'static str, max: usize },
    NameTooLong { len: usize, max: usize },
    MessageTooLong { len: usize, max: usize },
    /// A required argument (`name`, `file`, `message`, `timestamp`) was empty.
    NullArgument(&'static str),
    /// Dispatch was given a flag that no registered level carries.
    LevelNotFound(LevelFlag),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LogError::*;
        match self {
            CapacityExceeded { what, max } => {
                write!(f, "too many {what}: at most {max} can be registered")
            }
            NameTooLong { len, max } => {
                write!(f, "level name is {len} bytes long, maximum is {max}")
            }
            MessageTooLong { len, max } => {
                write!(f, "log message is {len} bytes long, maximum is {max}")
            }
            NullArgument(arg) => write!(f, "missing required argument: {arg}"),
            LevelNotFound(flag) => write!(f, "no level registered for flag {:#x}", flag.bits()),
        }
    }
}

impl std::error::Error for LogError {}
