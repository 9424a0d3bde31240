//! Text sources
//!
//! Reads the text to work on from a local file or an `http(s)` URL. Content
//! is returned exactly as stored; line endings are not rewritten, so a saved
//! ciphertext decrypts to the original.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

/// Default TCP connect timeout for URL sources
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
/// Default whole-request timeout for URL sources
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while reading a source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("No file or URL given")]
    EmptyLocation,

    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Unable to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to fetch {url}: {message}")]
    Http { url: String, message: String },

    #[error("Unable to fetch {url}: server answered {status}")]
    Status { url: String, status: u16 },
}

/// A parsed source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Local file path
    File(PathBuf),
    /// `http://` or `https://` URL
    Url(String),
}

impl Location {
    /// Classify `input`: anything starting with an http(s) scheme is a URL,
    /// everything else a file path.
    pub fn parse(input: &str) -> Result<Self, SourceError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SourceError::EmptyLocation);
        }

        let lower = input.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(input.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(input)))
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Something that can turn a location string into text.
///
/// The shell only talks to this trait, so tests can drive it with canned
/// text instead of the filesystem or network.
pub trait TextSource {
    /// Read all text at `location`.
    fn fetch(&self, location: &str) -> Result<String, SourceError>;
}

/// Reads local files and fetches URLs with a blocking HTTP client
#[derive(Debug, Clone)]
pub struct SourceLoader {
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
    }
}

impl SourceLoader {
    /// Loader with explicit HTTP timeouts
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            request_timeout,
        }
    }

    /// Read a local file.
    pub fn read_file(&self, path: &Path) -> Result<String, SourceError> {
        debug!(path = %path.display(), "reading file source");
        std::fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::Read {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    /// Fetch a URL with a GET request.
    pub fn fetch_url(&self, url: &str) -> Result<String, SourceError> {
        let http_error = |error: reqwest::Error| SourceError::Http {
            url: url.to_string(),
            message: error.to_string(),
        };

        let client = reqwest::blocking::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .build()
            .map_err(http_error)?;

        debug!(url, "fetching url source");
        let response = client.get(url).send().map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(http_error)?;
        info!(url, bytes = body.len(), "fetched url source");
        Ok(body)
    }
}

impl TextSource for SourceLoader {
    fn fetch(&self, location: &str) -> Result<String, SourceError> {
        let location = Location::parse(location)?;
        debug!(%location, "resolving text source");
        match location {
            Location::File(path) => self.read_file(&path),
            Location::Url(url) => self.fetch_url(&url),
        }
    }
}
