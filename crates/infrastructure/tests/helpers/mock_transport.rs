use async_trait::async_trait;
use hoard_dns_application::ports::{DnsTransport, TransportResponse};
use hoard_dns_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Upstream double: hands back a canned response and counts exchanges.
pub struct MockTransport {
    response: Vec<u8>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn new(response: Vec<u8>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        _message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TransportResponse {
            bytes: self.response.clone(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}

/// Upstream double whose every exchange times out.
pub struct TimeoutTransport {
    calls: AtomicUsize,
}

impl TimeoutTransport {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for TimeoutTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsTransport for TimeoutTransport {
    async fn send(
        &self,
        _message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::TransportTimeout {
            server: "mock-upstream".to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
