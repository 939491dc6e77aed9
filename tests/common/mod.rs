//! Shared utilities for integration tests.

// Each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use std::net::SocketAddr;

use tokio::net::TcpListener;
use weather_proxy::config::ApiKey;
use weather_proxy::http::HttpServer;
use weather_proxy::lifecycle::Shutdown;
use weather_proxy::ProxyConfig;

/// Credential used by the test proxy and expected by the mock upstream.
pub const TEST_API_KEY: &str = "test-api-key";

/// Build a proxy config pointed at the given upstream base URL.
pub fn proxy_config(upstream_url: &str) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.upstream.base_url = upstream_url.to_string();
    config
}

/// Spawn the proxy on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; dropping the handle
/// without triggering leaves the task to die with the test runtime.
pub async fn spawn_proxy(config: ProxyConfig, credential: Option<ApiKey>) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port must bind");
    let addr = listener.local_addr().expect("bound listener has an address");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, credential);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Spawn the proxy with the standard test credential.
pub async fn spawn_proxy_with_key(config: ProxyConfig) -> (SocketAddr, Shutdown) {
    let credential = ApiKey::new(TEST_API_KEY).expect("test key is non-blank");
    spawn_proxy(config, Some(credential)).await
}

/// HTTP client that ignores any proxy settings in the environment.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client must build")
}
