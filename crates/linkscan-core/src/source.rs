//! Input side: something that yields the ordered URL list.
//!
//! An unreadable or empty list is the one fatal, run-aborting condition;
//! everything after this point degrades to per-URL error records.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to obtain the URL list. Aborts the whole run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read URL list {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("URL list {path} contains no URLs")]
    Empty { path: PathBuf },
}

/// Supplies the ordered sequence of URL strings for one run.
pub trait UrlSource {
    fn urls(&self) -> Result<Vec<String>, SourceError>;
}

/// Line-oriented URL list file: one URL per line, blank lines and `#`
/// comments ignored. Order of the remaining lines is preserved.
#[derive(Debug)]
pub struct LineFileSource {
    path: PathBuf,
}

impl LineFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UrlSource for LineFileSource {
    fn urls(&self) -> Result<Vec<String>, SourceError> {
        let data = fs::read_to_string(&self.path).map_err(|source| SourceError::Unreadable {
            path: self.path.clone(),
            source,
        })?;
        let urls: Vec<String> = data
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
        if urls.is_empty() {
            return Err(SourceError::Empty {
                path: self.path.clone(),
            });
        }
        Ok(urls)
    }
}
