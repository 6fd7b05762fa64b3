//! Soft assertions that report through a [`FailureReporter`].
//!
//! Every predicate returns `true` when it holds. Otherwise it reports exactly one
//! failure and returns `false`; nothing panics. Pass a [`Logger`] to have failures
//! logged at error level, or any other reporter to collect them elsewhere.

use std::fmt::{self, Debug};

use crate::prelude::Logger;

/// Something that accepts a formatted assertion failure.
pub trait FailureReporter {
    fn report(&self, args: fmt::Arguments<'_>);
}

impl FailureReporter for Logger {
    fn report(&self, args: fmt::Arguments<'_>) {
        self.errorf(args);
    }
}

pub fn equal<R, T, U>(
    reporter: &R, expected: &T, actual: &U, msg: Option<fmt::Arguments<'_>>
) -> bool
where
    R: FailureReporter + ?Sized,
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    if expected.eq(actual) {
        return true;
    }
    fail(reporter, format_args!("Not equal: expected: {:?}, actual: {:?}", expected, actual), msg)
}

pub fn nil<R, T>(reporter: &R, object: &Option<T>, msg: Option<fmt::Arguments<'_>>) -> bool
where
    R: FailureReporter + ?Sized,
    T: Debug,
{
    match object {
        None => true,
        Some(value) => fail(reporter, format_args!("Expected nil, but got: {:?}", value), msg),
    }
}

pub fn not_nil<R, T>(reporter: &R, object: &Option<T>, msg: Option<fmt::Arguments<'_>>) -> bool
where
    R: FailureReporter + ?Sized,
{
    match object {
        Some(_) => true,
        None => fail(reporter, format_args!("Expected value not to be nil."), msg),
    }
}

pub fn is_true<R>(reporter: &R, value: bool, msg: Option<fmt::Arguments<'_>>) -> bool
where
    R: FailureReporter + ?Sized,
{
    value || fail(reporter, format_args!("Should be true"), msg)
}

pub fn is_false<R>(reporter: &R, value: bool, msg: Option<fmt::Arguments<'_>>) -> bool
where
    R: FailureReporter + ?Sized,
{
    !value || fail(reporter, format_args!("Should be false"), msg)
}

fn fail<R>(reporter: &R, failure: fmt::Arguments<'_>, msg: Option<fmt::Arguments<'_>>) -> bool
where
    R: FailureReporter + ?Sized,
{
    match msg {
        Some(msg) => reporter.report(format_args!("{}; messages: {}", failure, msg)),
        None => reporter.report(failure),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl FailureReporter for Recorder {
        fn report(&self, args: fmt::Arguments<'_>) {
            self.0.lock().unwrap().push(args.to_string());
        }
    }

    impl Recorder {
        fn reports(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    #[test]
    fn equal_reports_only_on_mismatch() {
        let recorder = Recorder::default();

        assert!(equal(&recorder, &1, &1, None));
        assert!(equal(&recorder, "abc", "abc", None));
        assert!(recorder.reports().is_empty());

        assert!(!equal(&recorder, &1, &2, None));
        assert_eq!(recorder.reports(), vec!["Not equal: expected: 1, actual: 2"]);
    }

    #[test]
    fn equal_compares_across_types() {
        let recorder = Recorder::default();
        let owned = String::from("name");

        assert!(equal(&recorder, &owned, "name", None));
        assert!(!equal(&recorder, &owned, "other", Some(format_args!("lookup {}", 3))));
        assert_eq!(
            recorder.reports(),
            vec!["Not equal: expected: \"name\", actual: \"other\"; messages: lookup 3"]
        );
    }

    #[test]
    fn nil_and_not_nil() {
        let recorder = Recorder::default();

        assert!(nil::<_, u8>(&recorder, &None, None));
        assert!(not_nil(&recorder, &Some(3), None));
        assert!(recorder.reports().is_empty());

        assert!(!nil(&recorder, &Some("x"), None));
        assert!(!not_nil::<_, u8>(&recorder, &None, Some(format_args!("id {}", 9))));
        assert_eq!(recorder.reports(), vec![
            "Expected nil, but got: \"x\"".to_string(),
            "Expected value not to be nil.; messages: id 9".to_string(),
        ]);
    }

    #[test]
    fn true_and_false() {
        let recorder = Recorder::default();

        assert!(is_true(&recorder, true, None));
        assert!(is_false(&recorder, false, None));
        assert!(!is_true(&recorder, false, None));
        assert!(!is_false(&recorder, true, Some(format_args!("flag"))));

        assert_eq!(recorder.reports(), vec![
            "Should be true".to_string(),
            "Should be false; messages: flag".to_string(),
        ]);
    }

    #[cfg(not(feature = "loom"))]
    #[test]
    fn logger_reports_at_error_level() {
        use crate::prelude::tests::{file_logger, read_lines};

        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = file_logger(dir.path(), "assert.log");

        assert!(equal(&logger, &"a", &"a", None));
        assert!(read_lines(&path).is_empty());

        assert!(!equal(&logger, &"a", &"b", None));
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\terror\t"));
        assert!(lines[0].ends_with(" - Not equal: expected: \"a\", actual: \"b\""));
    }
}
