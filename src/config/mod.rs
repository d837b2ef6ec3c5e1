//! Configuration module
//!
//! Built-in defaults, the optional YAML settings file, and the
//! environment-driven limits used while loading category files.

pub mod loader;

use std::time::Duration;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::catalog::order::CategoryOrder;

pub use loader::{ConfigLoader, Limits};

/// Site URL used when neither the CLI, `SITE_URL`, nor the config file set one.
pub const DEFAULT_SITE_URL: &str = "https://ai-interview-guide.com";

/// Per-request timeout for category fetches.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Category files probed when the config does not list its own.
pub const DEFAULT_QUESTION_FILES: &[&str] = &[
    "q-agent.json",
    "q-ai-product.json",
    "q-rag.json",
    "q-model-optimization.json",
    "q-agentic-techniques.json",
    "q-prompt-engineering.json",
    "q-context-engineering.json",
    "q-evaluation.json",
    "q-responsible-ai.json",
    "q-ai-ux.json",
    "q-feedback-loops.json",
    "q-multimodal.json",
    "q-rapid-prototyping.json",
];

/// Contents of the optional YAML settings file. Every key is optional.
///
/// ```yaml
/// site_url: https://ai-interview-guide.com
/// question_files: [q-rag.json, q-agent.json]
/// category_order:
///   prompt-engineering: 1
/// fetch_timeout: 5s
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuideConfig {
    /// Public base URL of the site.
    pub site_url: Option<String>,

    /// Category file names to discover, in load order.
    pub question_files: Option<Vec<String>>,

    /// Replacement display order (slug -> positive priority).
    pub category_order: Option<IndexMap<String, u32>>,

    /// Per-request fetch timeout, in humantime format (`10s`, `1m`).
    pub fetch_timeout: Option<String>,
}

impl GuideConfig {
    /// Configured site URL, or the built-in default.
    #[must_use]
    pub fn site_url(&self) -> &str {
        self.site_url.as_deref().unwrap_or(DEFAULT_SITE_URL)
    }

    /// Configured candidate files, or the built-in list.
    #[must_use]
    pub fn question_files(&self) -> Vec<String> {
        self.question_files.clone().unwrap_or_else(|| {
            DEFAULT_QUESTION_FILES
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }

    /// Configured display order, or the built-in table.
    #[must_use]
    pub fn category_order(&self) -> CategoryOrder {
        self.category_order
            .clone()
            .map_or_else(CategoryOrder::default, CategoryOrder::new)
    }

    /// Configured fetch timeout, or [`DEFAULT_FETCH_TIMEOUT`].
    ///
    /// The loader has already checked that the value parses.
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
            .as_deref()
            .and_then(|raw| humantime::parse_duration(raw).ok())
            .unwrap_or(DEFAULT_FETCH_TIMEOUT)
    }
}
