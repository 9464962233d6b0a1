//! Blocking curl (libcurl) transport.
//!
//! One fresh Easy handle per request, performed on the current thread. The
//! checker is deliberately sequential, so there is no handle pooling.

use crate::transport::{RequestOptions, Transport, TransportError, TransportResponse};

/// The production transport: libcurl easy handles, redirects followed.
#[derive(Debug, Default)]
pub struct CurlTransport;

impl CurlTransport {
    pub fn new() -> Self {
        Self
    }

    fn perform(
        &self,
        url: &str,
        opts: &RequestOptions,
        head_only: bool,
    ) -> Result<TransportResponse, TransportError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        if head_only {
            easy.nobody(true)?;
        } else {
            easy.get(true)?;
        }
        easy.follow_location(true)?;
        easy.timeout(opts.timeout)?;
        easy.useragent(&opts.user_agent)?;

        {
            let mut transfer = easy.transfer();
            // GET bodies are fetched only to complete the transfer.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        let status = easy.response_code()? as u16;
        let final_url = easy
            .effective_url()?
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string());

        Ok(TransportResponse { status, final_url })
    }
}

impl Transport for CurlTransport {
    fn head(&self, url: &str, opts: &RequestOptions) -> Result<TransportResponse, TransportError> {
        tracing::trace!(url, "HEAD probe");
        self.perform(url, opts, true)
    }

    fn get(&self, url: &str, opts: &RequestOptions) -> Result<TransportResponse, TransportError> {
        tracing::trace!(url, "GET probe");
        self.perform(url, opts, false)
    }
}
