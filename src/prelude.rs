use std::backtrace::Backtrace;
use std::fmt::{self, Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use arc_swap::ArcSwap;
use chrono::Local;
use lazy_static::lazy_static;

pub use crate::config::{
    EncoderConfig, Encoding, LevelEncoder, LoggerConfig, TimeEncoder, DEFAULT_CONFIG,
};
pub use crate::error::LoggerError;
pub use crate::levels::Level;

use crate::backend::Backend;
use crate::sync::AtomicLevel;

/// Layout of the wall-clock stamp prepended to every message.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Process exit status used by the fatal operations.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Unwind payload of the panic operations.
///
/// [`Logger::panicf`] and friends log their message and then unwind the calling thread
/// with this payload. The unwind is recoverable: an enclosing
/// [`std::panic::catch_unwind`] receives it and can downcast to `LoggedPanic`. The panic
/// hook is not run, the message has already been logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggedPanic {
    message: String,
}

impl LoggedPanic {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for LoggedPanic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A leveled logger with a live level threshold and swappable outputs.
///
/// Most programs use the process-wide instance through [`Logger::global`] or the crate's
/// free functions and macros. Independent instances can be built with [`Logger::new`].
///
/// Severity model:
/// * `debugf`, `infof`, `warnf`, `errorf`, `error`: log and continue.
/// * `panicf`, `panic`: log, then unwind with a [`LoggedPanic`] (recoverable).
/// * `fatalf`, `fatal`: log, sync, then exit the process with [`FATAL_EXIT_CODE`].
pub struct Logger {
    config: Mutex<LoggerConfig>,
    level: Arc<AtomicLevel>,
    backend: ArcSwap<Backend>,
}

impl Logger {
    /// Builds a logger from `config`, opening every output it names.
    pub fn new(config: LoggerConfig) -> Result<Self, LoggerError> {
        let level = Arc::new(AtomicLevel::new(config.level));
        let backend = Backend::build(&config, level.clone())?;

        Ok(Self {
            config: Mutex::new(config),
            level,
            backend: ArcSwap::from_pointee(backend),
        })
    }

    /// The process-wide logger, built from [`DEFAULT_CONFIG`] on first use.
    ///
    /// # Panics
    ///
    /// If the embedded configuration cannot be parsed or its outputs cannot be opened.
    /// There is no usable logger in that case.
    pub fn global() -> &'static Logger {
        lazy_static! {
            static ref LOGGER: Logger = LoggerConfig::embedded()
                .and_then(Logger::new)
                .unwrap_or_else(|e| panic!("simplelogger: cannot build the default logger: {}", e));
        }

        &LOGGER
    }

    /// Sets the threshold below which calls are suppressed. Takes effect immediately,
    /// without rebuilding the backend.
    pub fn set_level(&self, level: Level) {
        let mut config = self.lock_config();
        config.level = level;
        self.level.store(level);
    }

    /// The current threshold.
    pub fn get_level(&self) -> Level {
        self.level.load()
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> LoggerConfig {
        self.lock_config().clone()
    }

    /// Replaces the outputs and rebuilds the backend.
    ///
    /// The new backend is installed before the old one is synced, so emitters racing
    /// with the swap finish their line on whichever backend they loaded. On error the
    /// previous outputs stay in place.
    pub fn try_set_output<I, S>(&self, outputs: I) -> Result<(), LoggerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = self.lock_config();

        let mut next = config.clone();
        next.output_paths = outputs.into_iter().map(Into::into).collect();

        let backend = Backend::build(&next, self.level.clone())?;
        let previous = self.backend.swap(Arc::new(backend));
        previous.sync();

        *config = next;
        Ok(())
    }

    /// Like [`Logger::try_set_output`], but a backend that cannot be built is fatal.
    pub fn set_output<I, S>(&self, outputs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Err(e) = self.try_set_output(outputs) {
            self.fatalf(format_args!("SetOutput: {}", e));
        }
    }

    /// Flushes every sink of the current backend.
    pub fn sync(&self) {
        self.backend.load().sync();
    }

    /// Case-insensitive level lookup that never fails: unknown names are logged at
    /// error level and map to [`Level::Debug`].
    pub fn parse_level(&self, name: &str) -> Level {
        name.parse().unwrap_or_else(|_| {
            self.errorf(format_args!("ParseLevel: unknown level: {}", name));
            Level::Debug
        })
    }

    /// Emits `args` at `level`, prefixed with the current time, if the level is enabled.
    /// Never unwinds or exits, whatever the level.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let backend = self.backend.load();
        if backend.enabled(level) {
            let message = format!("{} - {}", Local::now().format(TIMESTAMP_FORMAT), args);
            backend.write(level, &message);
        }
    }

    /// Logs at debug level.
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Logs at info level.
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Logs at warn level.
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Logs at error level.
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Logs at panic level, then unwinds with a [`LoggedPanic`]. The unwind happens
    /// even when the panic level is filtered out.
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.log(Level::Panic, format_args!("{}", message));
        std::panic::resume_unwind(Box::new(LoggedPanic { message }))
    }

    /// Logs at fatal level, syncs, then exits the process.
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::Fatal, args);
        self.sync();
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Logs the `Display` form of `msg` at error level.
    pub fn error(&self, msg: impl Display) {
        self.errorf(format_args!("{}", msg));
    }

    /// Non-formatted [`Logger::panicf`].
    pub fn panic(&self, msg: impl Display) -> ! {
        self.panicf(format_args!("{}", msg))
    }

    /// Non-formatted [`Logger::fatalf`].
    pub fn fatal(&self, msg: impl Display) -> ! {
        self.fatalf(format_args!("{}", msg))
    }

    /// Emits the current backtrace and then the message, as two error level lines.
    pub fn trace_error(&self, args: fmt::Arguments<'_>) {
        self.error(Backtrace::force_capture());
        self.errorf(args);
    }

    /// Unwraps `result`, or panics through the logger with `msg` followed by the error.
    pub fn panic_if_error<T, E: Display>(&self, result: Result<T, E>, msg: impl Display) -> T {
        match result {
            Ok(value) => value,
            Err(e) => self.panicf(format_args!("{}: {}", msg, e)),
        }
    }

    /// Formatted [`Logger::panic_if_error`].
    pub fn panicf_if_error<T, E: Display>(&self, result: Result<T, E>, args: fmt::Arguments<'_>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => self.panicf(format_args!("{}: {}", args, e)),
        }
    }

    /// Unwraps `result`, or logs `msg` followed by the error and exits the process.
    pub fn fatal_if_error<T, E: Display>(&self, result: Result<T, E>, msg: impl Display) -> T {
        match result {
            Ok(value) => value,
            Err(e) => self.fatalf(format_args!("{}: {}", msg, e)),
        }
    }

    /// Formatted [`Logger::fatal_if_error`].
    pub fn fatalf_if_error<T, E: Display>(&self, result: Result<T, E>, args: fmt::Arguments<'_>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => self.fatalf(format_args!("{}: {}", args, e)),
        }
    }

    /// All panics after this call will be logged at panic level.
    ///
    /// Replaces the current panic hook. Unwinds raised by this logger's own panic
    /// operations bypass the hook and are not logged twice.
    pub fn log_panics(&'static self) {
        std::panic::set_hook(Box::new(move |info| {
            let payload = info.payload();
            let message = match payload.downcast_ref::<&str>() {
                Some(s) => s.to_string(),
                None => match payload.downcast_ref::<String>() {
                    Some(s) => s.clone(),
                    None => "Panic with unknown payload".to_string(),
                },
            };

            match info.location() {
                Some(location) => self.log(
                    Level::Panic, format_args!("PANIC at '{}': {}", location, message)
                ),
                None => self.log(Level::Panic, format_args!("PANIC: {}", message)),
            }
        }));
    }

    fn lock_config(&self) -> MutexGuard<'_, LoggerConfig> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.get_level())
            .field("config", &*self.lock_config())
            .finish()
    }
}
