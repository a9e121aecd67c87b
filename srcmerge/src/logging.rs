//! Stderr diagnostics for merges.
//!
//! The merge reports what it visits, pairs and skips through the `log`
//! macros. [`Logger`] is the `log` backend that prints those records to
//! stderr, prefixed with `srcmerge:` and the record level, so they never mix
//! with merged output on stdout.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "SRCMERGE_LOG_MODE";

/// How much the merge reports on stderr.
///
/// Levels are ordered from least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Nothing but the final error, which the CLI prints itself.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything, including one line per visited, paired or skipped file.
    Verbose,
}

impl LogLevel {
    /// The `log` crate filter for this level.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Accepts `quiet`, `normal` or `verbose` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Quiet, Self::Normal, Self::Verbose]
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(&level.to_string()))
            .ok_or_else(|| format!("unknown {LOG_MODE_ENV} value: {s}"))
    }
}

/// The stderr `log` backend.
///
/// ```
/// use srcmerge::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Verbose);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger that prints records at or above `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Installs this logger as the process-wide `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend is already installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn format(record: &log::Record<'_>) -> String {
        let level = record.level().to_string().to_ascii_lowercase();
        format!("srcmerge: {level}: {}", record.args())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

/// Picks the logger level for a run.
///
/// `--verbose` beats `--quiet`, either flag beats [`LOG_MODE_ENV`], and an
/// unset or unparsable variable means [`LogLevel::Normal`].
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    };
    Logger::new(level)
}
