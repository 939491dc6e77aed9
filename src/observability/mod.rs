//! Observability subsystem.
//!
//! Structured logging only: events carry the request ID from the tracing
//! middleware, and the provider credential never appears in any field.

pub mod logging;

pub use logging::init_logging;
