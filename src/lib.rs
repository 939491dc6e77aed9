//! Weather Lookup Proxy
//!
//! A small server-side proxy between a weather UI and the OpenWeather API,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                 WEATHER PROXY                  │
//!                    │                                                │
//!   Client Request   │  ┌─────────┐   ┌────────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ validation │──▶│ upstream │──┼──▶ OpenWeather
//!                    │  │ server  │   │ (query +   │   │  client  │  │      API
//!                    │  └─────────┘   │ credential)│   └────┬─────┘  │
//!                    │                └────────────┘        │        │
//!   Client Response  │  ┌─────────┐                         │        │
//!   ◀────────────────┼──│ error / │◀────────────────────────┘        │
//!                    │  │ pass-   │   404 → City not found            │
//!                    │  │ through │   other fault → generic 500       │
//!                    │  └─────────┘   2xx JSON → verbatim body        │
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐  │
//!                    │  │  Cross-cutting: config, lifecycle,        │  │
//!                    │  │  observability (tracing + request IDs)    │  │
//!                    │  └──────────────────────────────────────────┘  │
//!                    └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{load_config, ApiKey, ProxyConfig};
pub use http::{HttpServer, ProxyError};
pub use lifecycle::Shutdown;
pub use upstream::{UpstreamClient, WeatherResource};
