//! Logger configuration.
//!
//! The process-wide logger starts from [`DEFAULT_CONFIG`], a JSON document embedded in
//! the crate. Any document of the same shape can be loaded with
//! [`LoggerConfig::from_json`] and handed to [`Logger::new`](crate::Logger::new).

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;
use crate::levels::Level;

/// Configuration the global logger is built from on first use.
pub const DEFAULT_CONFIG: &str = r#"{
    "level": "debug",
    "outputPaths": ["stderr"],
    "errorOutputPaths": ["stderr"],
    "encoding": "console",
    "encoderConfig": {
        "messageKey": "message",
        "levelKey": "level",
        "timeKey": "time",
        "levelEncoder": "lowercase",
        "timeEncoder": "iso8601"
    }
}"#;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    pub level: Level,
    /// Sinks every emitted line is written to.
    pub output_paths: Vec<String>,
    /// Sinks the backend reports its own write failures to.
    #[serde(default)]
    pub error_output_paths: Vec<String>,
    #[serde(default)]
    pub encoding: Encoding,
    #[serde(default)]
    pub encoder_config: EncoderConfig,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self, LoggerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses [`DEFAULT_CONFIG`].
    pub fn embedded() -> Result<Self, LoggerError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_output<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_paths = outputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_error_output<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.error_output_paths = outputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Default for LoggerConfig {
    /// Same value as [`LoggerConfig::embedded`], built without parsing.
    fn default() -> Self {
        Self {
            level: Level::Debug,
            output_paths: vec!["stderr".to_string()],
            error_output_paths: vec!["stderr".to_string()],
            encoding: Encoding::Console,
            encoder_config: EncoderConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Tab separated `time`, `level`, `message`.
    #[default]
    Console,
    /// One JSON object per line.
    Json,
}

/// Field names and renderers used by the encoders. An empty key drops the field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncoderConfig {
    pub message_key: String,
    pub level_key: String,
    pub time_key: String,
    pub level_encoder: LevelEncoder,
    pub time_encoder: TimeEncoder,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            message_key: "message".to_string(),
            level_key: "level".to_string(),
            time_key: "time".to_string(),
            level_encoder: LevelEncoder::Lowercase,
            time_encoder: TimeEncoder::Iso8601,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelEncoder {
    #[default]
    Lowercase,
    Capital,
}

impl LevelEncoder {
    pub fn encode(self, level: Level) -> &'static str {
        match self {
            LevelEncoder::Lowercase => level.as_str(),
            LevelEncoder::Capital => level.capital_str(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeEncoder {
    /// `2006-01-02T15:04:05.000-0700`
    #[default]
    Iso8601,
    /// `2006-01-02T15:04:05.000-07:00`
    Rfc3339,
    /// Milliseconds since the Unix epoch.
    Millis,
}

impl TimeEncoder {
    pub fn encode(self, time: &chrono::DateTime<chrono::Local>) -> String {
        match self {
            TimeEncoder::Iso8601 => time.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string(),
            TimeEncoder::Rfc3339 => time.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimeEncoder::Millis => time.timestamp_millis().to_string(),
        }
    }
}
