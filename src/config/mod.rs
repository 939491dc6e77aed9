//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, defaults when absent)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!
//! environment
//!     → credential.rs (OPENWEATHER_API_KEY → ApiKey, redacted Debug)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults so a missing or minimal config file works
//! - Validation separates syntactic (serde) from semantic checks
//! - The provider credential comes from the environment only, through one
//!   shared resolution path used by every endpoint; there is no baked-in
//!   fallback key

pub mod credential;
pub mod loader;
pub mod schema;
pub mod validation;

pub use credential::{ApiKey, CREDENTIAL_ENV_VAR};
pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ProxyConfig, TimeoutConfig, UpstreamConfig};
