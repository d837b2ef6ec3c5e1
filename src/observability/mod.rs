//! Observability
//!
//! Structured logging for the catalog loader and the site tooling.

pub mod logging;

pub use logging::{LogFormat, init_logging};
