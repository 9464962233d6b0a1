//! Output side: something that persists the run's records.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::checker::{RunSummary, UrlRecord};

/// Consumes the records of one run, in the order they were produced.
pub trait ResultSink {
    fn write(&mut self, summary: &RunSummary, records: &[UrlRecord]) -> Result<()>;
}

#[derive(Serialize)]
struct Report<'a> {
    summary: &'a RunSummary,
    records: &'a [UrlRecord],
}

/// Writes the run as a pretty-printed JSON report file.
#[derive(Debug)]
pub struct JsonReportSink {
    path: PathBuf,
}

impl JsonReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for JsonReportSink {
    fn write(&mut self, summary: &RunSummary, records: &[UrlRecord]) -> Result<()> {
        let report = Report { summary, records };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&self.path, json)
            .with_context(|| format!("cannot write report to {}", self.path.display()))?;
        tracing::info!("report written to {}", self.path.display());
        Ok(())
    }
}
