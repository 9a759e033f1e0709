pub mod constants;
pub mod dispatcher;
pub mod formatter;
pub mod level_registry;
pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod logger_config;
pub mod sink_table;

pub use dispatcher::{DispatchReport, SinkWriteFailure};
pub use log_error::LogError;
pub use log_level::{Level, LevelFlag, LevelSet};
pub use log_sink::SinkOptions;
pub use logger::Logger;
