//! Notification side: hands the run summary onward.
//!
//! Delivery is best-effort by contract; a notifier must never fail the run.
//! The original deployment mailed the report out, so the seam takes the full
//! record list as well as the counts.

use crate::checker::{RunSummary, UrlRecord};

/// Consumes the end-of-run summary. Must swallow its own delivery failures.
pub trait Notifier {
    fn notify(&self, summary: &RunSummary, records: &[UrlRecord]);
}

/// Notifier that reports through the tracing log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, summary: &RunSummary, records: &[UrlRecord]) {
        tracing::info!(
            total = summary.total,
            processed = summary.processed,
            skipped = summary.skipped,
            errors = summary.errors,
            "run complete"
        );
        for r in records.iter().filter(|r| r.is_probe_failure()) {
            tracing::warn!(url = %r.url, error = r.error.as_deref(), "unreachable URL");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_notifier_never_panics_on_empty_run() {
        let records: Vec<UrlRecord> = vec![];
        LogNotifier.notify(&RunSummary::from_records(&records), &records);
    }
}
