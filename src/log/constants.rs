// Capacity limits
pub const MAX_LEVEL_COUNT: usize = 64; // bit width of a level flag
pub const MAX_SINK_COUNT: usize = 256;
pub const MAX_NAME_LEN: usize = 256; // bytes
pub const MAX_MESSAGE_LEN: usize = 4096; // bytes

// ANSI color escapes
pub const NO_COLOR: &str = "\x1b[0;m";
pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const MAGENTA: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[0;36m";
pub const WHITE: &str = "\x1b[0;37m";

// Default level names
pub const WARN_NAME: &str = "WARN";
pub const ERROR_NAME: &str = "ERROR";
pub const INFO_NAME: &str = "INFO";
pub const SUCCESS_NAME: &str = "SUCCESS";
pub const DEBUG_NAME: &str = "DEBUG";

// Prefix of every line sent to the diagnostics channel (stderr)
pub const DIAGNOSTICS_PREFIX: &str = "[rustylog]";

/// Maps a color name as written in config files to its escape sequence.
///
/// `none` maps to an empty code, so the tag renders undecorated even on a
/// color-enabled sink.
#[must_use]
pub fn color_code_by_name(name: &str) -> Option<&'static str> {
    match name.trim().to_ascii_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "yellow" => Some(YELLOW),
        "blue" => Some(BLUE),
        "magenta" => Some(MAGENTA),
        "cyan" => Some(CYAN),
        "white" => Some(WHITE),
        "none" => Some(""),
        _ => None,
    }
}
