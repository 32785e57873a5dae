use std::path::Path;

// Re-export logging functions for convenience.
pub use log::*;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("unable to create log file: {0}")]
    File(#[from] std::io::Error),
    #[error("invalid logging configuration: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("a logger is already installed: {0}")]
    AlreadyInstalled(#[from] SetLoggerError),
}

/// Initializes logging. Should be called before any other logging functions. Provided
/// `LevelFilter` will remove all logs below the provided level.
///
/// Console output goes to stderr so tools stay silent on stdout. When `log_dir` is given,
/// everything is also written to a file in that folder named after the current time.
pub fn init(filter: LevelFilter, log_dir: Option<&Path>) -> Result<(), LogInitError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})}: {m}{n}")))
        .build();

    let mut config =
        Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");

    if let Some(log_dir) = log_dir {
        let now = chrono::Utc::now();
        let log_file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d} - {l} - {m}{n}")))
            .build(log_dir.join(format!("{}.txt", now.format("%Y %m %d %H %M %S"))))?;

        config = config.appender(Appender::builder().build("log_file", Box::new(log_file)));
        root = root.appender("log_file");
    }

    let config = config.build(root.build(filter))?;
    log4rs::init_config(config)?;

    log_panics::init();

    Ok(())
}

/// Maps a `-v` repetition count to a level filter. Zero keeps tools quiet unless something
/// goes wrong.
pub fn verbosity_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
