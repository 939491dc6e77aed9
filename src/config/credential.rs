//! Provider credential handling.
//!
//! The OpenWeather API key is an opaque secret sourced from the process
//! environment. Every endpoint resolves it through this one path; there is
//! no per-endpoint fallback value.

use std::env;
use std::fmt;

/// Environment variable holding the provider API key.
pub const CREDENTIAL_ENV_VAR: &str = "OPENWEATHER_API_KEY";

/// Opaque provider credential.
///
/// The inner value is reachable only through [`ApiKey::expose`], and the
/// `Debug` representation is redacted so the secret cannot leak through
/// logging or error formatting.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key, rejecting blank values.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Read the credential from `OPENWEATHER_API_KEY`.
    ///
    /// Returns `None` when the variable is unset or blank; callers surface
    /// that per request as a configuration error.
    pub fn from_env() -> Option<Self> {
        env::var(CREDENTIAL_ENV_VAR).ok().and_then(Self::new)
    }

    /// The raw secret, for building the outbound query string.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_rejected() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
    }

    #[test]
    fn test_key_roundtrip() {
        let key = ApiKey::new("secret-value").expect("non-blank key must be accepted");
        assert_eq!(key.expose(), "secret-value");
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("secret-value").expect("non-blank key must be accepted");
        let rendered = format!("{key:?}");

        assert!(!rendered.contains("secret-value"));
        assert_eq!(rendered, "ApiKey(<redacted>)");
    }
}
