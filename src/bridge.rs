//! Routes `tracing` events into a [`Logger`].
//!
//! ```rust,ignore
//! simplelogger::bridge::init_tracing()?;
//! tracing::info!(user = "ada", "logged in");
//! // ... info	2024-05-01 10:00:00.000 - logged in user="ada"
//! ```
//!
//! Events are only ever logged: a tracing `ERROR` never unwinds or exits.

use std::fmt::{self, Write};

use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::levels::Level;
use crate::prelude::Logger;

/// A tracing-subscriber layer that forwards every event to a [`Logger`].
pub struct FacadeLayer {
    logger: &'static Logger,
}

impl FacadeLayer {
    /// Forwards to [`Logger::global`].
    pub fn new() -> Self {
        Self::with_logger(Logger::global())
    }

    pub fn with_logger(logger: &'static Logger) -> Self {
        Self { logger }
    }

    fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }
}

impl Default for FacadeLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subscriber> Layer<S> for FacadeLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());
        if level < self.logger.get_level() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.logger.log(level, format_args!("{}", visitor.finish()));
    }
}

/// Collects the `message` field first, then every other field as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

/// Installs a registry with a [`FacadeLayer`] over the global logger as the global
/// default subscriber.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(FacadeLayer::new()).try_init()
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;
    use crate::prelude::tests::{file_logger, read_lines};
    use tracing_subscriber::layer::SubscriberExt;

    fn leaked_logger(name: &str) -> (&'static Logger, tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = file_logger(dir.path(), name);
        (Box::leak(Box::new(logger)), dir, path)
    }

    #[test]
    fn maps_tracing_levels() {
        assert_eq!(FacadeLayer::map_level(&tracing::Level::TRACE), Level::Debug);
        assert_eq!(FacadeLayer::map_level(&tracing::Level::DEBUG), Level::Debug);
        assert_eq!(FacadeLayer::map_level(&tracing::Level::INFO), Level::Info);
        assert_eq!(FacadeLayer::map_level(&tracing::Level::WARN), Level::Warn);
        assert_eq!(FacadeLayer::map_level(&tracing::Level::ERROR), Level::Error);
    }

    #[test]
    fn forwards_events_with_fields() {
        let (logger, _dir, path) = leaked_logger("bridge.log");
        let subscriber = tracing_subscriber::registry().with(FacadeLayer::with_logger(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(user = "ada", attempt = 2, "logged in");
            tracing::error!("went wrong");
        });

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\tinfo\t"));
        assert!(lines[0].ends_with(" - logged in user=\"ada\" attempt=2"));
        assert!(lines[1].contains("\terror\t"));
        assert!(lines[1].ends_with(" - went wrong"));
    }

    #[test]
    fn respects_logger_level() {
        let (logger, _dir, path) = leaked_logger("bridge_level.log");
        logger.set_level(Level::Warn);
        let subscriber = tracing_subscriber::registry().with(FacadeLayer::with_logger(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("quiet");
            tracing::info!("quiet too");
            tracing::warn!("loud");
        });

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" - loud"));
    }
}
