//! `linkscan check <input>` – run the sequential checker over a URL list.

use std::path::{Path, PathBuf};

use anyhow::Result;
use linkscan_core::checker::{self, RunSummary};
use linkscan_core::config::LinkscanConfig;
use linkscan_core::notify::{LogNotifier, Notifier};
use linkscan_core::sink::{JsonReportSink, ResultSink};
use linkscan_core::source::{LineFileSource, UrlSource};
use linkscan_core::transport::CurlTransport;

pub fn run_check(cfg: &LinkscanConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let source = LineFileSource::new(input);
    // The one fatal condition: the list itself cannot be read.
    let urls = source.urls()?;
    tracing::info!(count = urls.len(), input = %input.display(), "starting check run");

    let run_cfg = cfg.run_config();
    let records = checker::check(&urls, &run_cfg, &CurlTransport::new());
    let summary = RunSummary::from_records(&records);

    let out_path = match output {
        Some(p) => p.to_path_buf(),
        None => default_report_path(input),
    };
    let mut sink = JsonReportSink::new(&out_path);
    sink.write(&summary, &records)?;

    LogNotifier.notify(&summary, &records);
    println!(
        "Checked {} URL(s): {} probed, {} skipped, {} unreachable.",
        summary.total, summary.processed, summary.skipped, summary.errors
    );
    println!("Report: {}", out_path.display());
    Ok(())
}

/// `urls.txt` → `urls_report.json`, alongside the input.
fn default_report_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "linkscan".to_string());
    input.with_file_name(format!("{stem}_report.json"))
}
