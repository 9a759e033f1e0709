//! Builds a [`Logger`] from a loaded [`Config`].
//!
//! ```ini
//! [Logging]
//! defaults = true          # WARN/ERROR/INFO/SUCCESS/DEBUG
//! diagnostics = true
//!
//! [levels]
//! TRACE = magenta          # registered after the defaults, in file order
//!
//! [sink.console]
//! target = stdout          # stdout | stderr | path to a file
//! color = true
//! ignore = DEBUG, TRACE    # level names, or ALL
//! ```

use std::{
    fs::{self, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    config_error::ConfigError,
    log::{
        constants::color_code_by_name,
        level_registry::LevelRegistry,
        log_level::LevelSet,
        log_sink::SinkOptions,
        logger::Logger,
    },
};

const LOGGING_SECTION: &str = "Logging";
const LEVELS_SECTION: &str = "levels";
const SINK_PREFIX: &str = "sink.";

/// Registers levels and opens sinks as described by `config`.
///
/// Sinks are added in the order their `[sink.*]` sections appear. File
/// targets are opened in append mode; missing parent directories are created.
///
/// # Errors
///
/// Returns a [`ConfigError`] for malformed values, unknown level or color
/// names, files that cannot be opened, or registry/table overflow.
pub fn logger_from_config(config: &Config) -> Result<Logger<'static>, ConfigError> {
    let mut logger = if config.get_bool(LOGGING_SECTION, "defaults", true)? {
        Logger::with_defaults()
    } else {
        Logger::new()
    };
    logger.set_diagnostics(config.get_bool(LOGGING_SECTION, "diagnostics", true)?);

    if let Some(levels) = config.section(LEVELS_SECTION) {
        for (name, color) in &levels.entries {
            let code =
                color_code_by_name(color).ok_or_else(|| ConfigError::UnknownColor(color.clone()))?;
            logger.add_level(name, code)?;
        }
    }

    for section in config.sections_with_prefix(SINK_PREFIX) {
        let target = section
            .get_non_empty("target")
            .ok_or_else(|| ConfigError::MissingTarget(section.name.clone()))?;
        let color = match section.get_non_empty("color") {
            Some(value) => crate::config::parse_bool("color", value)?,
            None => false,
        };
        let options = if color {
            SinkOptions::COLOR
        } else {
            SinkOptions::DEFAULT
        };
        let ignored = match section.get_non_empty("ignore") {
            Some(list) => parse_level_list(logger.levels(), list)?,
            None => LevelSet::EMPTY,
        };

        match target {
            "stdout" => logger.add_stream(io::stdout(), options, ignored)?,
            "stderr" => logger.add_stream(io::stderr(), options, ignored)?,
            path => {
                let file = open_append(&expand_path(path)).map_err(|e| ConfigError::OpenSink {
                    target: path.to_owned(),
                    reason: e.to_string(),
                })?;
                logger.add_stream(file, options, ignored)?;
            }
        }
    }

    Ok(logger)
}

/// Turns `"DEBUG, INFO"` (commas or `|`) into a mask. `ALL` selects every
/// registered level.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownLevel`] for a name not in `levels`.
pub fn parse_level_list(levels: &LevelRegistry, list: &str) -> Result<LevelSet, ConfigError> {
    list.split([',', '|'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .try_fold(LevelSet::EMPTY, |set, name| {
            if name.eq_ignore_ascii_case("all") {
                return Ok(set | levels.all_levels());
            }
            levels
                .find_by_name(name)
                .map(|level| set | level.flag)
                .ok_or_else(|| ConfigError::UnknownLevel(name.to_owned()))
        })
}

fn open_append(path: &Path) -> io::Result<fs::File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
