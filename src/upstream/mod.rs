//! Upstream weather provider subsystem.
//!
//! # Data Flow
//! ```text
//! validated city + credential
//!     → client.rs (one outbound GET, q/units/appid query string)
//!     → provider responds
//!     → 404        → UpstreamError::CityNotFound (expected miss)
//!     → other !2xx → UpstreamError::BadStatus (operator-only detail)
//!     → 2xx        → syntactic JSON check → raw body bytes, unchanged
//! ```
//!
//! # Design Decisions
//! - Single attempt per invocation; no retries, no failover
//! - Success bodies are passed through as opaque bytes, never reshaped
//! - Transport and decode causes are preserved for logging only

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{UpstreamError, WeatherResource};
