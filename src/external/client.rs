use std::sync::LazyLock;
use std::time::Duration;

/// Shared HTTP client used by the default transport
///
/// Initialized lazily on first access and reused across the process.
///
/// # Benefits
/// - **Connection pooling**: reuses TCP connections across sends
/// - **DNS caching**: reduces lookup overhead for the fixed API host
///
/// # Features
/// - **Timeouts**: 30s request timeout, 10s connect timeout
/// - **Security**: Rustls for TLS with peer verification, HTTPS only
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        // Security
        .https_only(true)
        .use_rustls_tls()
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }
}
