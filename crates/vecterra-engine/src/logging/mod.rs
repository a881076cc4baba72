//! Logging utilities.
//!
//! Library code only talks to the `log` facade; this module owns the one place an
//! `env_logger` backend gets installed.

mod init;

pub use init::{init_logging, LoggingConfig};
