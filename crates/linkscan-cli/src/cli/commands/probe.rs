//! `linkscan probe <url>` – one-off probe of a single URL.

use anyhow::{bail, Result};
use linkscan_core::checker;
use linkscan_core::config::LinkscanConfig;
use linkscan_core::transport::CurlTransport;
use linkscan_core::url_model::normalize_url;

pub fn run_probe(cfg: &LinkscanConfig, url: &str) -> Result<()> {
    let url = normalize_url(url);
    if url.is_empty() {
        bail!("no URL provided");
    }

    // Single-URL probes bypass the allow-list; the caller asked for this
    // exact URL.
    let record = checker::probe_record(&url, &cfg.run_config(), &CurlTransport::new());
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
