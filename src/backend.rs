use std::sync::Arc;

use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::config::{EncoderConfig, Encoding, LoggerConfig, TimeEncoder};
use crate::error::LoggerError;
use crate::levels::Level;
use crate::sink::Sink;
use crate::sync::AtomicLevel;

/// The engine behind a [`Logger`](crate::Logger): encodes lines and fans them out to
/// the configured sinks.
///
/// A backend is immutable once built. Changing outputs means building a new one and
/// swapping it in; the old one is synced when replaced and again when the last
/// in-flight emitter drops it.
pub(crate) struct Backend {
    level: Arc<AtomicLevel>,
    outputs: Vec<Sink>,
    error_outputs: Vec<Sink>,
    encoding: Encoding,
    encoder: EncoderConfig,
}

impl Backend {
    pub fn build(config: &LoggerConfig, level: Arc<AtomicLevel>) -> Result<Self, LoggerError> {
        Ok(Self {
            level,
            outputs: Sink::open_all(&config.output_paths)?,
            error_outputs: Sink::open_all(&config.error_output_paths)?,
            encoding: config.encoding,
            encoder: config.encoder_config.clone(),
        })
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.level.enabled(level)
    }

    /// Encodes and writes `message` to every output if `level` passes the threshold.
    pub fn write(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let now = Local::now();
        let line = self.encode(level, &now, message);

        for sink in &self.outputs {
            if let Err(e) = sink.write_line(line.as_bytes()) {
                self.report_write_error(&now, sink, &e);
            }
        }
    }

    pub fn sync(&self) {
        for sink in self.outputs.iter().chain(&self.error_outputs) {
            // Standard streams may refuse fsync-like calls; nothing to do about it here.
            let _ = sink.sync();
        }
    }

    fn report_write_error(&self, now: &DateTime<Local>, sink: &Sink, err: &std::io::Error) {
        let line = format!(
            "{} write error: {}: {}\n", TimeEncoder::Iso8601.encode(now), sink.name(), err
        );
        for error_sink in &self.error_outputs {
            let _ = error_sink.write_line(line.as_bytes());
        }
    }

    fn encode(&self, level: Level, now: &DateTime<Local>, message: &str) -> String {
        match self.encoding {
            Encoding::Console => self.encode_console(level, now, message),
            Encoding::Json => self.encode_json(level, now, message),
        }
    }

    fn encode_console(&self, level: Level, now: &DateTime<Local>, message: &str) -> String {
        let mut line = String::with_capacity(message.len() + 48);

        if !self.encoder.time_key.is_empty() {
            line.push_str(&self.encoder.time_encoder.encode(now));
            line.push('\t');
        }
        if !self.encoder.level_key.is_empty() {
            line.push_str(self.encoder.level_encoder.encode(level));
            line.push('\t');
        }
        line.push_str(message);
        line.push('\n');
        line
    }

    fn encode_json(&self, level: Level, now: &DateTime<Local>, message: &str) -> String {
        let mut object = Map::new();

        if !self.encoder.level_key.is_empty() {
            object.insert(
                self.encoder.level_key.clone(),
                Value::from(self.encoder.level_encoder.encode(level)),
            );
        }
        if !self.encoder.time_key.is_empty() {
            let time = match self.encoder.time_encoder {
                TimeEncoder::Millis => Value::from(now.timestamp_millis()),
                encoder => Value::from(encoder.encode(now)),
            };
            object.insert(self.encoder.time_key.clone(), time);
        }
        if !self.encoder.message_key.is_empty() {
            object.insert(self.encoder.message_key.clone(), Value::from(message));
        }

        let mut line = Value::Object(object).to_string();
        line.push('\n');
        line
    }
}

impl Drop for Backend {
    fn drop(&mut self) {
        self.sync();
    }
}
