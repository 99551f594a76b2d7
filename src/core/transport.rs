//! HTTP transport seam
//!
//! The client never talks to the network directly; it hands fully built
//! requests to an [`HttpTransport`]. `reqwest::Client` is the default, and
//! tests or callers with special needs (proxies, recording, timeouts) plug in
//! their own.

use async_trait::async_trait;

/// Sends one HTTP request and returns the response
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform the round trip for `request`
    async fn execute(&self, request: reqwest::Request) -> reqwest::Result<reqwest::Response>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        reqwest::Client::execute(self, request).await
    }
}
