//! Logging init: file under the XDG state dir, falling back to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Per-event writer: the log file, or stderr when the file clone fails.
enum LogWriter {
    File(fs::File),
    Stderr,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileWriter(fs::File);

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogWriter::File)
            .unwrap_or(LogWriter::Stderr)
    }
}

/// Open `~/.local/state/linkscan/linkscan.log` for appending.
fn open_log_file() -> Result<(fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscan")?;
    let log_dir = xdg_dirs.get_state_home().join("linkscan");
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("linkscan.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Initialize structured logging. Logs to the state-dir file when possible,
/// otherwise (state dir missing or unwritable) to stderr, so the CLI always
/// comes up with a subscriber installed.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linkscan=debug"));

    let (writer, log_path) = match open_log_file() {
        Ok((file, path)) => (BoxMakeWriter::new(FileWriter(file)), Some(path)),
        Err(_) => (BoxMakeWriter::new(io::stderr), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    match log_path {
        Some(path) => tracing::info!("logging to {}", path.display()),
        None => tracing::warn!("state dir unavailable, logging to stderr"),
    }
}
