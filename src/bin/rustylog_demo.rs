//! Demo binary: builds a logger and writes one line per default level.
//!
//! ```text
//! rustylog-demo                 # colored stdout, all default levels
//! rustylog-demo rustylog.conf   # sinks and levels from a config file
//! ```

use std::{env, io, process};

use rustylog::{
    config::Config,
    log::{
        log_level::{LevelSet, SUCCESS},
        log_sink::SinkOptions,
        logger::Logger,
        logger_config::logger_from_config,
    },
    logger_debug, logger_error, logger_info, logger_success, logger_warn,
};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut logger = match args.len() {
        // no extra args -> colored stdout
        1 => {
            let mut logger = Logger::with_defaults();
            if let Err(e) = logger.add_stream(io::stdout(), SinkOptions::COLOR, LevelSet::EMPTY) {
                eprintln!("Error adding stdout sink: {e}");
                process::exit(1);
            }
            logger
        }

        // one extra arg: config file path
        2 => {
            let config = Config::load(&args[1]).unwrap_or_else(|e| {
                eprintln!("Error loading config: {e}. Using empty config.");
                Config::empty()
            });
            match logger_from_config(&config) {
                Ok(logger) => logger,
                Err(e) => {
                    eprintln!("Error building logger from {}: {e}", args[1]);
                    process::exit(1);
                }
            }
        }

        // anything else -> usage error
        _ => {
            eprintln!("Usage:");
            eprintln!("  {}            # log to colored stdout", args[0]);
            eprintln!("  {} [CONFIG]   # e.g. rustylog.conf", args[0]);
            process::exit(1);
        }
    };

    if logger.sink_count() == 0 {
        eprintln!("[rustylog-demo] no sinks configured, nothing will be written");
    }

    // Failures are already reported on stderr by the logger itself.
    let _ = logger_warn!(logger, "running with {} sink(s)", logger.sink_count());
    let _ = logger_error!(logger, "this is what an error looks like");
    let _ = logger_info!(logger, "{} levels registered", logger.levels().len());
    let _ = logger_success!(logger, "all default levels printed");
    let _ = logger_debug!(logger, "pid {}", process::id());

    if logger.levels().resolve(SUCCESS).is_some() {
        let _ = logger.log(SUCCESS, "plain method call, location captured automatically");
    }

    logger.flush()
}
