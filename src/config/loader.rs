//! Settings file loader
//!
//! Reads the optional YAML settings file:
//! 1. Size check against [`Limits`]
//! 2. UTF-8 BOM removal
//! 3. YAML parsing into [`GuideConfig`] (unknown keys rejected)
//! 4. Value checks (positive priorities, parseable timeout, absolute URL)

use std::path::Path;

use crate::config::GuideConfig;
use crate::error::ConfigError;

// ============================================================================
// Limits
// ============================================================================

/// Input size limits, overridable from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted category or settings file, in bytes.
    pub max_file_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: env_or("GUIDE_MAX_FILE_SIZE", 5 * 1024 * 1024),
        }
    }
}

// ============================================================================
// Loader
// ============================================================================

/// Settings file loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    limits: Limits,
}

impl ConfigLoader {
    /// Creates a loader with the given limits.
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Loads and checks a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is too large, is not
    /// valid YAML for [`GuideConfig`], or carries an invalid value.
    pub fn load(&self, path: &Path) -> Result<GuideConfig, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if file_size > self.limits.max_file_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{file_size} bytes"),
                expected: format!("at most {} bytes", self.limits.max_file_size),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let config = Self::parse(&raw, path)?;
        tracing::debug!(config = %path.display(), "settings file loaded");
        Ok(config)
    }

    /// Parses settings from an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a value is invalid.
    pub fn load_from_str(&self, raw: &str) -> Result<GuideConfig, ConfigError> {
        if raw.len() > self.limits.max_file_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{} bytes", raw.len()),
                expected: format!("at most {} bytes", self.limits.max_file_size),
            });
        }
        Self::parse(raw, Path::new("<string>"))
    }

    fn parse(raw: &str, path: &Path) -> Result<GuideConfig, ConfigError> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        if raw.trim().is_empty() {
            return Ok(GuideConfig::default());
        }

        let config: GuideConfig =
            serde_yaml::from_str(raw).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        check_values(&config)?;
        Ok(config)
    }
}

fn check_values(config: &GuideConfig) -> Result<(), ConfigError> {
    if let Some(order) = &config.category_order {
        if let Some((slug, _)) = order.iter().find(|(_, priority)| **priority == 0) {
            return Err(ConfigError::InvalidValue {
                field: format!("category_order.{slug}"),
                value: "0".to_string(),
                expected: "a positive integer".to_string(),
            });
        }
    }

    if let Some(raw) = &config.fetch_timeout {
        let expected = match humantime::parse_duration(raw) {
            Err(e) => Some(format!("a duration such as '10s' ({e})")),
            Ok(d) if d.is_zero() => Some("a positive duration".to_string()),
            Ok(_) => None,
        };
        if let Some(expected) = expected {
            return Err(ConfigError::InvalidValue {
                field: "fetch_timeout".to_string(),
                value: raw.clone(),
                expected,
            });
        }
    }

    if let Some(url) = &config.site_url {
        if reqwest::Url::parse(url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "site_url".to_string(),
                value: url.clone(),
                expected: "an absolute URL".to_string(),
            });
        }
    }

    Ok(())
}

/// Reads `name` from the environment, falling back to `default` when it is
/// unset or does not parse.
pub fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
