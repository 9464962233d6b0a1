//! HTTP transport seam.
//!
//! The checker never talks to libcurl directly; it goes through [`Transport`]
//! so tests can substitute a scripted stub and count calls. The only real
//! implementation is [`CurlTransport`].
//!
//! A transport call succeeds whenever the server answered with any HTTP
//! status, including 4xx/5xx. [`TransportError`] is reserved for failures
//! below HTTP: DNS, connect, timeout, broken transfers.

mod classify;
mod curl_transport;

pub use classify::classify_curl_error;
pub use curl_transport::CurlTransport;

use std::fmt;
use std::time::Duration;

/// Per-request knobs, immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Overall request timeout (connect + transfer).
    pub timeout: Duration,
    /// User-Agent header sent with every probe.
    pub user_agent: String,
}

/// Outcome of a transport call that reached an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Final HTTP status after redirects.
    pub status: u16,
    /// URL of the final response after following redirects.
    pub final_url: String,
}

/// Classification of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// DNS lookup failed.
    NameResolution,
    /// Request exceeded the configured timeout.
    Timeout,
    /// Connection refused/reset or the transfer broke off.
    Connection,
    /// Anything else libcurl (or a stub) reported.
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::NameResolution => "NameResolutionFailure",
            TransportErrorKind::Timeout => "TimeoutError",
            TransportErrorKind::Connection => "ConnectionError",
            TransportErrorKind::Other => "UnknownTransportError",
        };
        f.write_str(name)
    }
}

/// A failure below the HTTP layer. Carries the classification plus the
/// underlying message for the report.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub kind: TransportErrorKind,
    message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for TransportError {}

impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        TransportError::new(classify_curl_error(&e), e.to_string())
    }
}

/// One HTTP probe attempt. Implementations must follow redirects and report
/// the final URL in the response.
pub trait Transport {
    /// Issue a HEAD request.
    fn head(&self, url: &str, opts: &RequestOptions) -> Result<TransportResponse, TransportError>;

    /// Issue a GET request. The body is fetched but discarded.
    fn get(&self, url: &str, opts: &RequestOptions) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_has_classification_prefix() {
        let e = TransportError::new(TransportErrorKind::Timeout, "operation timed out");
        assert_eq!(e.to_string(), "TimeoutError: operation timed out");
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(
            TransportErrorKind::NameResolution.to_string(),
            "NameResolutionFailure"
        );
        assert_eq!(TransportErrorKind::Connection.to_string(), "ConnectionError");
        assert_eq!(
            TransportErrorKind::Other.to_string(),
            "UnknownTransportError"
        );
    }
}
