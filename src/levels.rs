use std::fmt::{self, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// Severity of a log call.
///
/// Levels are totally ordered, `Debug < Info < Warn < Error < Panic < Fatal`. A call is
/// emitted only when its level is at or above the logger's current level. `Panic` and
/// `Fatal` additionally abort after logging: the former unwinds the calling thread, the
/// latter terminates the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    #[serde(alias = "warning")]
    Warn = 2,
    Error = 3,
    Panic = 4,
    Fatal = 5,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug, Level::Info, Level::Warn, Level::Error, Level::Panic, Level::Fatal,
    ];

    /// Lowercase name, as written by the default level encoder.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        }
    }

    pub const fn capital_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Option<Level> {
        match value {
            0 => Some(Level::Debug),
            1 => Some(Level::Info),
            2 => Some(Level::Warn),
            3 => Some(Level::Error),
            4 => Some(Level::Panic),
            5 => Some(Level::Fatal),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Case-insensitive; `warning` is accepted as an alias of `warn`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            _ => Err(LoggerError::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_totally_ordered() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("wArN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("ERROR".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("panic".parse::<Level>().unwrap(), Level::Panic);
        assert_eq!("Fatal".parse::<Level>().unwrap(), Level::Fatal);
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        match "verbose".parse::<Level>() {
            Err(LoggerError::UnknownLevel(name)) => assert_eq!(name, "verbose"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn u8_representation_round_trips() {
        for level in Level::ALL {
            assert_eq!(Level::from_u8(level as u8), Some(level));
        }
        assert_eq!(Level::from_u8(6), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"warn\"");
        let level: Level = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, Level::Warn);
    }
}
