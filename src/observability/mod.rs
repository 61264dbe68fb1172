//! Observability module
//!
//! Logging setup for `glossgen` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
