//! Small fixed-size linear algebra, with batteries.
//!
//! This crate re-exports everything from [`varia_linalg`], and adds the logging setup used by
//! applications built on it.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log levels configured by [`init_logger!`], using the
//!   [`env_logger`] syntax (eg. `RUST_LOG=varia_linalg=trace`).
//!
//! [`env_logger`]: https://docs.rs/env_logger

use log::LevelFilter;

pub use varia_linalg::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("varia_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate, `varia` and `varia_linalg` will log at *debug* level; everything else is
/// off. The `RUST_LOG` environment variable is applied on top of that.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
