//! Free functions over [`Logger::global`].
//!
//! The formatted variants take [`fmt::Arguments`]; the `debugf!` family of macros builds
//! those for you.

use std::fmt::{self, Debug, Display};

use crate::assert;
use crate::levels::Level;
use crate::prelude::{Logger, LoggerError};

/// Sets the global threshold. See [`Logger::set_level`].
pub fn set_level(level: Level) {
    Logger::global().set_level(level);
}

/// The global threshold.
pub fn get_level() -> Level {
    Logger::global().get_level()
}

/// Replaces the outputs of the global logger. A backend that cannot be built is fatal.
pub fn set_output<I, S>(outputs: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Logger::global().set_output(outputs);
}

/// Replaces the outputs of the global logger, returning the error instead of exiting.
pub fn try_set_output<I, S>(outputs: I) -> Result<(), LoggerError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Logger::global().try_set_output(outputs)
}

/// Level named by `name`, or [`Level::Debug`] after logging an error.
pub fn parse_level(name: &str) -> Level {
    Logger::global().parse_level(name)
}

/// Flushes every output of the global logger.
pub fn sync() {
    Logger::global().sync();
}

/// Logs at debug level. Usually called through [`debugf!`](crate::debugf).
pub fn debugf(args: fmt::Arguments<'_>) {
    Logger::global().debugf(args);
}

/// Logs at info level.
pub fn infof(args: fmt::Arguments<'_>) {
    Logger::global().infof(args);
}

/// Logs at warn level.
pub fn warnf(args: fmt::Arguments<'_>) {
    Logger::global().warnf(args);
}

/// Logs at error level.
pub fn errorf(args: fmt::Arguments<'_>) {
    Logger::global().errorf(args);
}

/// Logs at panic level, then unwinds with a [`LoggedPanic`](crate::LoggedPanic).
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    Logger::global().panicf(args)
}

/// Logs at fatal level, then exits the process.
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    Logger::global().fatalf(args)
}

/// Logs the `Display` form of `msg` at error level.
pub fn error(msg: impl Display) {
    Logger::global().error(msg);
}

/// Non-formatted [`panicf`].
pub fn panic(msg: impl Display) -> ! {
    Logger::global().panic(msg)
}

/// Non-formatted [`fatalf`].
pub fn fatal(msg: impl Display) -> ! {
    Logger::global().fatal(msg)
}

/// Logs the current backtrace, then the message, both at error level.
pub fn trace_error(args: fmt::Arguments<'_>) {
    Logger::global().trace_error(args);
}

/// Returns the `Ok` value, or panics with `msg` followed by the error.
pub fn panic_if_error<T, E: Display>(result: Result<T, E>, msg: impl Display) -> T {
    Logger::global().panic_if_error(result, msg)
}

/// Formatted [`panic_if_error`].
pub fn panicf_if_error<T, E: Display>(result: Result<T, E>, args: fmt::Arguments<'_>) -> T {
    Logger::global().panicf_if_error(result, args)
}

/// Returns the `Ok` value, or exits with `msg` followed by the error.
pub fn fatal_if_error<T, E: Display>(result: Result<T, E>, msg: impl Display) -> T {
    Logger::global().fatal_if_error(result, msg)
}

/// Formatted [`fatal_if_error`].
pub fn fatalf_if_error<T, E: Display>(result: Result<T, E>, args: fmt::Arguments<'_>) -> T {
    Logger::global().fatalf_if_error(result, args)
}

/// Logs every later panic through the global logger. See [`Logger::log_panics`].
pub fn log_panics() {
    Logger::global().log_panics();
}

/// `true` if `expected == actual`, otherwise logs one error and returns `false`.
pub fn assert_equal<T, U>(expected: &T, actual: &U) -> bool
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    assert::equal(Logger::global(), expected, actual, None)
}

/// `true` if `object` is `None`, otherwise logs one error and returns `false`.
pub fn assert_nil<T: Debug>(object: &Option<T>) -> bool {
    assert::nil(Logger::global(), object, None)
}

/// `true` if `object` is `Some`, otherwise logs one error and returns `false`.
pub fn assert_not_nil<T>(object: &Option<T>) -> bool {
    assert::not_nil(Logger::global(), object, None)
}

/// `true` if `value` holds, otherwise logs one error and returns `false`.
pub fn assert_true(value: bool) -> bool {
    assert::is_true(Logger::global(), value, None)
}

/// `true` if `value` is false, otherwise logs one error and returns `false`.
pub fn assert_false(value: bool) -> bool {
    assert::is_false(Logger::global(), value, None)
}
