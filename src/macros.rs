//! Printf-style front ends for the global logger.

/// Logs at debug level through the global logger.
///
/// ```no_run
/// simplelogger::debugf!("this is a debug {}", 1);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::Logger::global().debugf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::Logger::global().infof(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::Logger::global().warnf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::Logger::global().errorf(::core::format_args!($($arg)+))
    };
}

/// Logs at panic level, then unwinds with a [`LoggedPanic`](crate::LoggedPanic).
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::Logger::global().panicf(::core::format_args!($($arg)+))
    };
}

/// Logs at fatal level, then exits the process.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::Logger::global().fatalf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)+) => {
        $crate::Logger::global().trace_error(::core::format_args!($($arg)+))
    };
}

/// `panicf_if_error!(result, "reading {}", path)` evaluates to the `Ok` value.
#[macro_export]
macro_rules! panicf_if_error {
    ($result:expr, $($arg:tt)+) => {
        $crate::Logger::global().panicf_if_error($result, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatalf_if_error {
    ($result:expr, $($arg:tt)+) => {
        $crate::Logger::global().fatalf_if_error($result, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_equalf {
    ($expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::assert::equal(
            $crate::Logger::global(), &$expected, &$actual,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[macro_export]
macro_rules! assert_nilf {
    ($object:expr, $($arg:tt)+) => {
        $crate::assert::nil(
            $crate::Logger::global(), &$object,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[macro_export]
macro_rules! assert_not_nilf {
    ($object:expr, $($arg:tt)+) => {
        $crate::assert::not_nil(
            $crate::Logger::global(), &$object,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[macro_export]
macro_rules! assert_truef {
    ($value:expr, $($arg:tt)+) => {
        $crate::assert::is_true(
            $crate::Logger::global(), $value,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[macro_export]
macro_rules! assert_falsef {
    ($value:expr, $($arg:tt)+) => {
        $crate::assert::is_false(
            $crate::Logger::global(), $value,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
