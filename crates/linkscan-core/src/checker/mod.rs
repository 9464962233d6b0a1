//! The sequential checker.
//!
//! Walks an ordered URL list, applies the allow-list, runs one probe per
//! allowed URL, and paces itself with a fixed sleep between network calls.
//! Strictly one probe in flight at a time; politeness toward the monitored
//! origin is the point, not an accident.

mod record;

pub use record::{RunSummary, UrlRecord, SKIPPED_EMPTY, SKIPPED_NOT_ALLOWED};

use std::thread;

use chrono::{SecondsFormat, Utc};

use crate::config::RunConfig;
use crate::probe;
use crate::transport::Transport;
use crate::url_model::{is_allowed_host, normalize_url};

/// Check every URL in order; one record per input URL, same order.
///
/// Per-URL failures never escape: they are captured in the record's `error`
/// field. Skipped URLs make no network call and incur no pacing delay.
pub fn check(urls: &[String], cfg: &RunConfig, transport: &dyn Transport) -> Vec<UrlRecord> {
    let mut records = Vec::with_capacity(urls.len());
    for raw in urls {
        let url = normalize_url(raw);
        if url.is_empty() {
            records.push(UrlRecord::skipped(url, now(), SKIPPED_EMPTY));
            continue;
        }
        if !is_allowed_host(&url, &cfg.allowed_domain) {
            tracing::debug!(%url, "outside allow-list, skipping");
            records.push(UrlRecord::skipped(url, now(), SKIPPED_NOT_ALLOWED));
            continue;
        }

        records.push(probe_record(&url, cfg, transport));

        // Fixed inter-request delay after every real network probe.
        thread::sleep(cfg.delay);
    }
    records
}

/// Probe one URL (allow-list not consulted) and build its record.
pub fn probe_record(url: &str, cfg: &RunConfig, transport: &dyn Transport) -> UrlRecord {
    let checking_time = now();
    let outcome = probe::probe(transport, url, &cfg.request_options());
    match &outcome.error {
        Some(e) => tracing::warn!(url, error = %e, "probe failed"),
        None => tracing::info!(
            url,
            status = outcome.status_code,
            elapsed_ms = outcome.elapsed_ms,
            "probe ok"
        ),
    }
    UrlRecord {
        url: url.to_string(),
        allowed: true,
        checking_time,
        status_code: outcome.status_code,
        final_url: Some(outcome.final_url),
        redirected: Some(outcome.redirected),
        elapsed_ms: Some(outcome.elapsed_ms),
        error: outcome.error.map(|e| e.to_string()),
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
