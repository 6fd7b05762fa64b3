//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use simplelogger::{Logger, LoggerConfig};

/// Serializes tests that touch the process-wide logger.
static GLOBAL: Mutex<()> = Mutex::new(());

pub fn lock_global() -> MutexGuard<'static, ()> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn file_logger(path: &Path) -> Logger {
    let config = LoggerConfig::default()
        .with_output([path.to_str().unwrap()])
        .with_error_output(Vec::<String>::new());
    Logger::new(config).unwrap()
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// A console line split into its level, message stamp and message body.
#[derive(Debug)]
pub struct Line {
    pub level: String,
    pub stamp: String,
    pub message: String,
}

pub fn parse_line(line: &str) -> Option<Line> {
    let mut fields = line.splitn(3, '\t');
    let _time = fields.next()?;
    let level = fields.next()?;
    let (stamp, message) = fields.next()?.split_once(" - ")?;

    Some(Line {
        level: level.to_string(),
        stamp: stamp.to_string(),
        message: message.to_string(),
    })
}

/// `YYYY-MM-DD HH:MM:SS.mmm`
pub fn is_stamp(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 23
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            19 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}
