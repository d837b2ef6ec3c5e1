//! Pre-bundled data for the web client.
//!
//! Serializes a loaded index into the JSON document the site ships with,
//! so the client can render without fetching category files at runtime.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{LoadedCategory, Question, QuestionIndex};

/// Build metadata embedded in the compiled bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// RFC 3339 UTC timestamp of the build.
    pub generated_at: String,
    /// Categories in the bundle.
    pub category_count: usize,
    /// Questions across all categories.
    pub question_count: usize,
    /// Files that contributed a category, in load order.
    pub source_files: Vec<String>,
}

/// The compiled data bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledBundle {
    /// Loaded categories keyed by slug, in load order.
    pub categories: IndexMap<String, LoadedCategory>,
    /// Every normalized question, category by category.
    pub questions: Vec<Question>,
    /// When and from what the bundle was built.
    pub build_info: BuildInfo,
}

impl CompiledBundle {
    /// Snapshots `index` with the given build time.
    #[must_use]
    pub fn from_index(index: &QuestionIndex, generated_at: DateTime<Utc>) -> Self {
        let source_files = index
            .categories()
            .values()
            .map(|c| c.file_name.clone())
            .collect();

        Self {
            categories: index.categories().clone(),
            questions: index.questions().to_vec(),
            build_info: BuildInfo {
                generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                category_count: index.category_count(),
                question_count: index.total_questions(),
                source_files,
            },
        }
    }

    /// Pretty JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}
