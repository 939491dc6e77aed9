//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, shared state)
//!     → request.rs (request ID generation and propagation)
//!     → validation.rs (query precondition checks)
//!     → handlers.rs (forward to upstream, map errors)
//!     → error.rs (ProxyError → status + {"error": ...} body)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;
pub mod validation;

pub use error::ProxyError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
