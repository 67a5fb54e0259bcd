//! Swappable HTTP transport seam.
//!
//! The notifier talks to the wire exclusively through [`HttpTransport`],
//! which keeps the networked half mockable in tests and lets hosts swap in
//! their own client policy.

use async_trait::async_trait;

use super::client::HTTP_CLIENT;
use crate::error::{NotifyError, NotifyResult};

/// Raw outcome of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Transport capability: post a form-encoded body, get status and body back.
///
/// Implementations must surface network-level failures as
/// `NotifyError::Transport` and everything that produced an HTTP response,
/// whatever its status, as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> NotifyResult<TransportResponse>;
}

/// Production transport backed by the shared reqwest client
pub struct ReqwestTransport;

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> NotifyResult<TransportResponse> {
        // reqwest errors embed the request URL, which carries the bot token;
        // strip it before the error leaves the transport.
        let response = HTTP_CLIENT
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| NotifyError::transport(e.without_url()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::transport(e.without_url()))?;

        Ok(TransportResponse { status, body })
    }
}
