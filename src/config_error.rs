use std::fmt;

use crate::log::log_error::LogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Read { path: String, reason: String },
    UnknownLevel(String),
    UnknownColor(String),
    InvalidBool { key: String, value: String },
    MissingTarget(String),
    OpenSink { target: String, reason: String },
    Log(LogError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            Read { path, reason } => write!(f, "Error reading file {path}: {reason}"),
            UnknownLevel(name) => write!(f, "Unknown level name: {name}"),
            UnknownColor(name) => write!(f, "Unknown color name: {name}"),
            InvalidBool { key, value } => {
                write!(f, "Invalid boolean for {key}: {value} (expected true/false)")
            }
            MissingTarget(section) => write!(f, "Section [{section}] has no target"),
            OpenSink { target, reason } => write!(f, "Failed to open sink {target}: {reason}"),
            Log(e) => write!(f, "Logger error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Log(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LogError> for ConfigError {
    fn from(err: LogError) -> Self {
        ConfigError::Log(err)
    }
}
