//! The HEAD-then-GET probe protocol.
//!
//! One probe per URL: a HEAD request, falling back to a single GET only when
//! HEAD fails at the transport level. Any HTTP response is a successful
//! outcome, whatever the status code — a server answering 405 to HEAD is
//! alive, and that is what the probe measures. No further retries.

use std::time::Instant;

use crate::transport::{RequestOptions, Transport, TransportError};

/// What one probe observed. Exactly one of `status_code` / `error` is set.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    /// HTTP status of the final response, absent when both attempts failed.
    pub status_code: Option<u16>,
    /// URL of the final response; the input URL when nothing answered.
    pub final_url: String,
    /// True when the final URL differs from the input URL.
    pub redirected: bool,
    /// Wall-clock duration of the attempt that produced the outcome.
    pub elapsed_ms: u64,
    /// Transport failure from the last attempt, when both HEAD and GET failed.
    pub error: Option<TransportError>,
}

/// Probe a single URL: HEAD first, one GET fallback on transport failure.
///
/// Never fails — transport errors end up in [`ProbeOutcome::error`].
pub fn probe(transport: &dyn Transport, url: &str, opts: &RequestOptions) -> ProbeOutcome {
    let start = Instant::now();
    match transport.head(url, opts) {
        Ok(resp) => {
            // The server answered HEAD; its status code is the result even
            // for 405-style rejections. No fallback.
            let elapsed_ms = start.elapsed().as_millis() as u64;
            ProbeOutcome {
                status_code: Some(resp.status),
                redirected: resp.final_url != url,
                final_url: resp.final_url,
                elapsed_ms,
                error: None,
            }
        }
        Err(head_err) => {
            tracing::debug!(url, error = %head_err, "HEAD failed, falling back to GET");
            let get_start = Instant::now();
            match transport.get(url, opts) {
                Ok(resp) => {
                    let elapsed_ms = get_start.elapsed().as_millis() as u64;
                    ProbeOutcome {
                        status_code: Some(resp.status),
                        redirected: resp.final_url != url,
                        final_url: resp.final_url,
                        elapsed_ms,
                        error: None,
                    }
                }
                Err(get_err) => {
                    // Both attempts failed; report the GET error and the
                    // total elapsed time across both attempts.
                    let elapsed_ms = start.elapsed().as_millis() as u64;
                    ProbeOutcome {
                        status_code: None,
                        final_url: url.to_string(),
                        redirected: false,
                        elapsed_ms,
                        error: Some(get_err),
                    }
                }
            }
        }
    }
}
