#![cfg_attr(docsrs, feature(doc_cfg))]

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
//! <br><br>
//!
//! ## You're probably looking for:
//! * [`Logger`](Logger)
//! * [`debugf!`](macro@debugf) and the free functions re-exported at the crate root
//! * [`assert`](mod@assert) for soft assertions

#[macro_use]
mod macros;

pub mod prelude;
pub mod error;
pub mod config;
pub mod assert;
pub(crate) mod levels;
pub(crate) mod sync;
pub(crate) mod sink;
pub(crate) mod backend;
mod global;

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod bridge;

pub use prelude::{
    Logger, LoggedPanic, LoggerConfig, LoggerError, Level, FATAL_EXIT_CODE, TIMESTAMP_FORMAT
};
pub use assert::FailureReporter;
pub use global::*;
