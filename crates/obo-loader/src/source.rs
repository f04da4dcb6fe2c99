//! Input source resolution and opening.
//!
//! An OBO file may be given as a URL, a gzip-compressed local file or a
//! plain local file. This module turns the user's path string into a
//! buffered line reader for the parser.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::types::{OboError, OboResult};

/// Where OBO text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Remote file fetched over HTTP(S).
    Url(String),
    /// Local gzip-compressed file (`.gz`).
    Gzip(PathBuf),
    /// Local plain-text file.
    Local(PathBuf),
}

impl InputSource {
    /// Resolves a path string.
    ///
    /// Anything starting with `http` is a URL; otherwise the path must name
    /// an existing file.
    ///
    /// # Errors
    /// Returns [`OboError::SourceUnavailable`] when the local file does not
    /// exist.
    pub fn resolve(path: &str) -> OboResult<Self> {
        if is_url(path) {
            return Ok(Self::Url(path.to_string()));
        }

        let local = Path::new(path);
        if !local.is_file() {
            return Err(OboError::SourceUnavailable {
                path: path.to_string(),
            });
        }

        if path.ends_with(".gz") {
            Ok(Self::Gzip(local.to_path_buf()))
        } else {
            Ok(Self::Local(local.to_path_buf()))
        }
    }

    /// Opens the source as a buffered reader.
    pub fn open(&self) -> OboResult<Box<dyn BufRead>> {
        match self {
            Self::Local(path) => {
                log_local(path);
                Ok(Box::new(BufReader::new(File::open(path)?)))
            }
            Self::Gzip(path) => {
                log_local(path);
                let decoder = MultiGzDecoder::new(File::open(path)?);
                Ok(Box::new(BufReader::new(decoder)))
            }
            Self::Url(url) => open_url(url),
        }
    }

    /// Returns true for remote sources.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

/// Resolves and opens `path` in one step.
pub fn open_input<P: AsRef<str>>(path: P) -> OboResult<Box<dyn BufRead>> {
    InputSource::resolve(path.as_ref())?.open()
}

fn is_url(path: &str) -> bool {
    path.starts_with("http")
}

fn log_local(path: &Path) {
    match std::fs::metadata(path) {
        Ok(meta) => tracing::debug!(
            "Opening {} ({})",
            path.display(),
            format_bytes(meta.len())
        ),
        Err(_) => tracing::debug!("Opening {}", path.display()),
    }
}

#[cfg(feature = "network")]
fn open_url(url: &str) -> OboResult<Box<dyn BufRead>> {
    tracing::debug!("Fetching {}", url);
    let response = reqwest::blocking::get(url)?.error_for_status()?;

    if url.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(response))))
    } else {
        Ok(Box::new(BufReader::new(response)))
    }
}

#[cfg(not(feature = "network"))]
fn open_url(url: &str) -> OboResult<Box<dyn BufRead>> {
    Err(OboError::SourceUnavailable {
        path: format!("{url} (built without the network feature)"),
    })
}

/// Renders a file size for log lines, in binary units above 1 KB.
///
/// ```
/// use obo_loader::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 bytes");
/// assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} bytes");
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{size:.2} {unit}")
}
