//! Result records and the per-run summary.

use serde::{Deserialize, Serialize};

/// Skip reason written verbatim into the report.
pub const SKIPPED_NOT_ALLOWED: &str = "Skipped: domain not allowed";
/// Skip reason for blank input rows.
pub const SKIPPED_EMPTY: &str = "Skipped: empty URL";

/// One result per input URL, produced in input order.
///
/// Field names are part of the report format and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The input URL after normalization (scheme added, whitespace trimmed).
    pub url: String,
    /// False when the URL was skipped without a network call.
    pub allowed: bool,
    /// RFC 3339 timestamp taken when the URL was processed.
    pub checking_time: String,
    /// Final HTTP status; absent for skips and transport failures.
    pub status_code: Option<u16>,
    /// URL of the final response after redirects; absent for skips.
    pub final_url: Option<String>,
    /// Whether the final URL differs from the input URL; absent for skips.
    pub redirected: Option<bool>,
    /// Probe duration in milliseconds; absent for skips.
    pub elapsed_ms: Option<u64>,
    /// Skip reason or classified transport error; absent on success.
    pub error: Option<String>,
}

impl UrlRecord {
    /// A record for a URL that was skipped without any network access.
    pub fn skipped(url: String, checking_time: String, reason: &str) -> Self {
        Self {
            url,
            allowed: false,
            checking_time,
            status_code: None,
            final_url: None,
            redirected: None,
            elapsed_ms: None,
            error: Some(reason.to_string()),
        }
    }

    /// True when the probe ran but did not produce a status code.
    pub fn is_probe_failure(&self) -> bool {
        self.allowed && self.status_code.is_none()
    }
}

/// Counts handed to the notifier at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of input URLs (and of records).
    pub total: usize,
    /// URLs that passed the allow-list and were probed.
    pub processed: usize,
    /// URLs skipped without a network call.
    pub skipped: usize,
    /// Probed URLs that ended in a transport error.
    pub errors: usize,
}

impl RunSummary {
    pub fn from_records(records: &[UrlRecord]) -> Self {
        let total = records.len();
        let skipped = records.iter().filter(|r| !r.allowed).count();
        let errors = records.iter().filter(|r| r.is_probe_failure()).count();
        Self {
            total,
            processed: total - skipped,
            skipped,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probed(status: Option<u16>) -> UrlRecord {
        UrlRecord {
            url: "https://www.rmit.edu.au/".into(),
            allowed: true,
            checking_time: "2026-01-01T00:00:00Z".into(),
            status_code: status,
            final_url: Some("https://www.rmit.edu.au/".into()),
            redirected: Some(false),
            elapsed_ms: Some(12),
            error: status.is_none().then(|| "TimeoutError: timed out".into()),
        }
    }

    #[test]
    fn summary_counts() {
        let records = vec![
            probed(Some(200)),
            probed(None),
            UrlRecord::skipped(
                "https://example.com/".into(),
                "2026-01-01T00:00:00Z".into(),
                SKIPPED_NOT_ALLOWED,
            ),
            probed(Some(404)),
        ];
        let s = RunSummary::from_records(&records);
        assert_eq!(
            s,
            RunSummary {
                total: 4,
                processed: 3,
                skipped: 1,
                errors: 1,
            }
        );
    }

    #[test]
    fn http_error_status_is_not_an_error() {
        // 404 is a successful probe outcome; only transport failures count.
        let s = RunSummary::from_records(&[probed(Some(404)), probed(Some(500))]);
        assert_eq!(s.errors, 0);
        assert_eq!(s.processed, 2);
    }

    #[test]
    fn record_serializes_with_stable_field_names() {
        let json = serde_json::to_value(probed(Some(200))).unwrap();
        for key in [
            "url",
            "allowed",
            "checking_time",
            "status_code",
            "final_url",
            "redirected",
            "elapsed_ms",
            "error",
        ] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
        assert!(json["error"].is_null());
    }
}
