//! Category file sources
//!
//! A source answers two questions: which of the candidate file names it
//! actually has, and what one file's raw JSON is. The index builder does
//! the parsing, so every source returns plain text.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::{StatusCode, Url, redirect};
use tracing::{debug, warn};

use crate::catalog::bundled::find_bundled;
use crate::config::Limits;
use crate::error::{ConfigError, LoadError};

/// Where category files come from.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Human-readable description for logs and errors.
    fn describe(&self) -> String;

    /// Returns the candidates this source can serve, in candidate order.
    async fn discover(&self, candidates: &[String]) -> Vec<String>;

    /// Returns the raw JSON of one file.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] describing why the file is unavailable.
    async fn fetch(&self, file: &str) -> Result<String, LoadError>;
}

// ============================================================================
// Bundled
// ============================================================================

/// Serves the files compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

#[async_trait]
impl CategorySource for BundledSource {
    fn describe(&self) -> String {
        "bundled data".to_string()
    }

    async fn discover(&self, candidates: &[String]) -> Vec<String> {
        candidates
            .iter()
            .filter(|name| find_bundled(name).is_some())
            .cloned()
            .collect()
    }

    async fn fetch(&self, file: &str) -> Result<String, LoadError> {
        find_bundled(file)
            .map(|f| f.json.to_string())
            .ok_or_else(|| LoadError::NotFound {
                file: file.to_string(),
            })
    }
}

// ============================================================================
// Directory
// ============================================================================

/// Serves files from a local directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
    limits: Limits,
}

impl DirSource {
    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, limits: Limits) -> Self {
        Self {
            root: root.into(),
            limits,
        }
    }
}

#[async_trait]
impl CategorySource for DirSource {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    async fn discover(&self, candidates: &[String]) -> Vec<String> {
        let mut found = Vec::with_capacity(candidates.len());
        for name in candidates {
            match tokio::fs::metadata(self.root.join(name)).await {
                Ok(meta) if meta.is_file() => found.push(name.clone()),
                Ok(_) => debug!(file = %name, "candidate is not a regular file"),
                Err(e) => debug!(file = %name, error = %e, "candidate not present"),
            }
        }
        found
    }

    async fn fetch(&self, file: &str) -> Result<String, LoadError> {
        read_limited(&self.root.join(file), file, &self.limits).await
    }
}

/// Reads a local category file, refusing files over `max_file_size`
/// before reading them.
pub(crate) async fn read_limited(
    path: &Path,
    file: &str,
    limits: &Limits,
) -> Result<String, LoadError> {
    let map_io = |source: std::io::Error| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                file: file.to_string(),
            }
        } else {
            LoadError::Io {
                file: file.to_string(),
                source,
            }
        }
    };

    let meta = tokio::fs::metadata(path).await.map_err(map_io)?;
    check_length(file, Some(meta.len()), limits)?;
    tokio::fs::read_to_string(path).await.map_err(map_io)
}

/// Rejects a declared length over the limit. An unknown length passes.
fn check_length(file: &str, length: Option<u64>, limits: &Limits) -> Result<(), LoadError> {
    let Some(length) = length else {
        return Ok(());
    };
    let size = usize::try_from(length).unwrap_or(usize::MAX);
    if size > limits.max_file_size {
        return Err(LoadError::TooLarge {
            file: file.to_string(),
            size,
            limit: limits.max_file_size,
        });
    }
    Ok(())
}

// ============================================================================
// HTTP
// ============================================================================

/// Creates the HTTP client used for category fetches.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built (should never happen).
#[must_use]
pub fn create_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(redirect::Policy::limited(5))
        .build()
        .expect("failed to build HTTP client")
}

/// Serves files below a base URL.
///
/// Discovery issues a `HEAD` per candidate; fetches use `GET`. Every
/// request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
    timeout: Duration,
    limits: Limits,
}

impl HttpSource {
    /// Creates a source for files under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `base_url` is not an
    /// absolute URL.
    pub fn new(base_url: &str, timeout: Duration, limits: Limits) -> Result<Self, ConfigError> {
        let with_slash = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base = Url::parse(&with_slash).map_err(|e| ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            expected: format!("an absolute URL ({e})"),
        })?;

        Ok(Self {
            client: create_http_client(),
            base,
            timeout,
            limits,
        })
    }

    fn url_for(&self, file: &str) -> Result<Url, LoadError> {
        self.base.join(file).map_err(|e| LoadError::Network {
            file: file.to_string(),
            message: e.to_string(),
        })
    }

    fn timeout_error(&self, file: &str) -> LoadError {
        LoadError::Timeout {
            file: file.to_string(),
            timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    async fn probe(&self, file: &str) -> Result<(), LoadError> {
        let url = self.url_for(file)?;
        let response = tokio::time::timeout(self.timeout, self.client.head(url).send())
            .await
            .map_err(|_| self.timeout_error(file))?
            .map_err(|e| LoadError::Network {
                file: file.to_string(),
                message: e.to_string(),
            })?;
        check_status(file, response.status())
    }
}

fn check_status(file: &str, status: StatusCode) -> Result<(), LoadError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(LoadError::HttpStatus {
            file: file.to_string(),
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl CategorySource for HttpSource {
    fn describe(&self) -> String {
        format!("URL {}", self.base)
    }

    async fn discover(&self, candidates: &[String]) -> Vec<String> {
        let probes = join_all(candidates.iter().map(|name| self.probe(name))).await;
        candidates
            .iter()
            .zip(probes)
            .filter_map(|(name, probe)| match probe {
                Ok(()) => Some(name.clone()),
                Err(e) => {
                    warn!(error = %e, "question file not accessible");
                    None
                }
            })
            .collect()
    }

    async fn fetch(&self, file: &str) -> Result<String, LoadError> {
        let url = self.url_for(file)?;
        debug!(%url, "fetching category file");

        let network = |e: reqwest::Error| LoadError::Network {
            file: file.to_string(),
            message: e.to_string(),
        };

        let response = tokio::time::timeout(self.timeout, self.client.get(url).send())
            .await
            .map_err(|_| self.timeout_error(file))?
            .map_err(network)?;
        check_status(file, response.status())?;
        check_length(file, response.content_length(), &self.limits)?;

        let bytes = tokio::time::timeout(self.timeout, response.bytes())
            .await
            .map_err(|_| self.timeout_error(file))?
            .map_err(network)?;

        // The declared length can be absent or wrong.
        check_length(
            file,
            Some(u64::try_from(bytes.len()).unwrap_or(u64::MAX)),
            &self.limits,
        )?;

        String::from_utf8(bytes.to_vec()).map_err(|e| LoadError::Parse {
            file: file.to_string(),
            line: None,
            message: format!("response is not UTF-8: {e}"),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn bundled_discovers_known_files_only() {
        let found = BundledSource
            .discover(&names(&["q-rag.json", "q-missing.json", "q-agent.json"]))
            .await;
        assert_eq!(found, ["q-rag.json", "q-agent.json"]);
    }

    #[tokio::test]
    async fn bundled_fetch_missing_is_not_found() {
        let err = BundledSource.fetch("q-missing.json").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[tokio::test]
    async fn dir_source_discovers_and_fetches() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("q-a.json"), "{}").unwrap();
        std::fs::create_dir(dir.path().join("q-dir.json")).unwrap();

        let source = DirSource::new(dir.path(), Limits::default());
        let found = source
            .discover(&names(&["q-a.json", "q-b.json", "q-dir.json"]))
            .await;
        assert_eq!(found, ["q-a.json"]);
        assert_eq!(source.fetch("q-a.json").await.unwrap(), "{}");
        assert!(matches!(
            source.fetch("q-b.json").await.unwrap_err(),
            LoadError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn dir_source_enforces_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("q-big.json"), "x".repeat(64)).unwrap();
        let source = DirSource::new(dir.path(), Limits { max_file_size: 16 });
        let err = source.fetch("q-big.json").await.unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { size: 64, .. }));
    }

    #[test]
    fn declared_length_over_limit_is_too_large() {
        let limits = Limits { max_file_size: 16 };
        let err = check_length("q-big.json", Some(17), &limits).unwrap_err();
        assert!(matches!(
            err,
            LoadError::TooLarge {
                size: 17,
                limit: 16,
                ..
            }
        ));
        assert!(check_length("q-big.json", Some(16), &limits).is_ok());
        assert!(check_length("q-big.json", None, &limits).is_ok());
    }

    #[test]
    fn http_source_rejects_relative_base() {
        let err = HttpSource::new("questions/", Duration::from_secs(1), Limits::default())
            .unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn http_source_joins_below_base() {
        let source = HttpSource::new(
            "https://example.test/questions",
            Duration::from_secs(1),
            Limits::default(),
        )
        .unwrap();
        assert_eq!(
            source.url_for("q-rag.json").unwrap().as_str(),
            "https://example.test/questions/q-rag.json"
        );
    }

    #[test]
    fn non_success_status_is_http_error() {
        let err = check_status("q-rag.json", StatusCode::NOT_FOUND).unwrap_err();
        assert!(matches!(err, LoadError::HttpStatus { status: 404, .. }));
        assert!(check_status("q-rag.json", StatusCode::OK).is_ok());
    }
}
