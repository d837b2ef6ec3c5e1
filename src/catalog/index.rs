//! Question index
//!
//! Aggregates categories into one flat, immutable question list plus a
//! slug -> category map. Loading tolerates individual bad files: each
//! failure is logged and skipped, and only a load where nothing succeeds
//! is an error.

use futures_util::future::join_all;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::catalog::normalize::normalize_category;
use crate::catalog::order::{CategoryOrder, sorted_entries};
use crate::catalog::schema::{CategoryData, LoadedCategory, Question};
use crate::catalog::slug::slugify;
use crate::catalog::source::CategorySource;
use crate::catalog::validation::Validator;
use crate::error::{IndexError, LoadError};

// ============================================================================
// Index
// ============================================================================

/// All loaded categories and their questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionIndex {
    categories: IndexMap<String, LoadedCategory>,
    questions: Vec<Question>,
}

impl QuestionIndex {
    /// Builds an index from already-parsed categories, in the order given.
    ///
    /// Each item is `(slug, data, file_name)`. A repeated slug keeps the
    /// first category and drops the later one so ids stay unique.
    pub fn from_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = (String, CategoryData, String)>,
    {
        let mut index = Self::default();
        for (slug, data, file_name) in categories {
            if let Err(e) = index.insert(slug, data, file_name) {
                warn!(error = %e, "skipping category");
            }
        }
        index
    }

    fn insert(
        &mut self,
        slug: String,
        data: CategoryData,
        file_name: String,
    ) -> Result<(), LoadError> {
        if let Some(existing) = self.categories.get(&slug) {
            return Err(LoadError::DuplicateSlug {
                file: file_name,
                slug,
                existing: existing.file_name.clone(),
            });
        }

        self.questions.extend(normalize_category(&data, &slug));
        self.categories
            .insert(slug.clone(), LoadedCategory::new(data, slug, file_name));
        Ok(())
    }

    /// Categories keyed by slug, in load order.
    #[must_use]
    pub const fn categories(&self) -> &IndexMap<String, LoadedCategory> {
        &self.categories
    }

    /// All questions, category by category in load order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up one category by slug.
    #[must_use]
    pub fn category(&self, slug: &str) -> Option<&LoadedCategory> {
        self.categories.get(slug)
    }

    /// Categories in display order.
    #[must_use]
    pub fn sorted_categories(&self, order: &CategoryOrder) -> Vec<(&str, &LoadedCategory)> {
        sorted_entries(&self.categories, order)
    }

    /// Number of loaded categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of questions across all categories.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions in one category.
    #[must_use]
    pub fn count_for_category(&self, slug: &str) -> usize {
        self.questions.iter().filter(|q| q.category == slug).count()
    }

    /// Number of questions at one (lowercase) level.
    #[must_use]
    pub fn count_for_level(&self, level: &str) -> usize {
        self.questions
            .iter()
            .filter(|q| q.skill_level == level)
            .count()
    }

    /// Closest known slug to `input`, for "did you mean" hints.
    ///
    /// Only suggests when the Damerau-Levenshtein distance is at most 3.
    #[must_use]
    pub fn suggest_category(&self, input: &str) -> Option<&str> {
        self.categories
            .keys()
            .map(|slug| (slug.as_str(), strsim::damerau_levenshtein(input, slug)))
            .filter(|(_, dist)| *dist <= 3)
            .min_by_key(|(_, dist)| *dist)
            .map(|(slug, _)| slug)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Incrementally builds an index from raw category files.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: QuestionIndex,
    validator: Validator,
    attempted: usize,
}

impl IndexBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses, validates and adds one category file.
    ///
    /// Validation warnings are logged; the file is still accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the JSON is malformed, fails validation,
    /// or repeats a slug that is already loaded. The builder is unchanged
    /// in that case.
    pub fn add_raw(&mut self, file: &str, raw: &str) -> Result<&LoadedCategory, LoadError> {
        self.attempted += 1;
        let data = parse_category(file, raw)?;

        let result = self.validator.validate(&data);
        if result.has_errors() {
            return Err(LoadError::Invalid {
                file: file.to_string(),
                issues: result.errors,
            });
        }
        for warning in &result.warnings {
            warn!(file, "{warning}");
        }

        let slug = slugify(&data.category);
        self.index.insert(slug.clone(), data, file.to_string())?;
        Ok(&self.index.categories[&slug])
    }

    /// Records a file that could not be obtained at all.
    pub fn record_failure(&mut self) {
        self.attempted += 1;
    }

    /// Finishes the index.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::NoData` when no category was accepted.
    pub fn build(self) -> Result<QuestionIndex, IndexError> {
        if self.index.categories.is_empty() {
            return Err(IndexError::NoData {
                attempted: self.attempted,
            });
        }
        Ok(self.index)
    }
}

/// Parses one category document.
///
/// # Errors
///
/// Returns `LoadError::Parse` if `raw` is not a category JSON object.
pub fn parse_category(file: &str, raw: &str) -> Result<CategoryData, LoadError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    serde_json::from_str(raw).map_err(|e| LoadError::Parse {
        file: file.to_string(),
        line: Some(e.line()),
        message: e.to_string(),
    })
}

// ============================================================================
// Loading
// ============================================================================

/// Discovers, fetches and indexes category files from `source`.
///
/// Fetches run concurrently; results are folded back in candidate order so
/// the index does not depend on which request finished first. A file that
/// cannot be fetched or parsed is logged and skipped.
///
/// # Errors
///
/// Returns `IndexError::NoFiles` if discovery finds nothing and
/// `IndexError::NoData` if every discovered file fails.
pub async fn load_index(
    source: &dyn CategorySource,
    candidates: &[String],
) -> Result<QuestionIndex, IndexError> {
    let files = source.discover(candidates).await;
    debug!(source = %source.describe(), files = ?files, "discovered question files");

    if files.is_empty() {
        return Err(IndexError::NoFiles {
            source_name: source.describe(),
        });
    }

    let fetched = join_all(files.iter().map(|file| source.fetch(file))).await;

    let mut builder = IndexBuilder::new();
    for (file, result) in files.iter().zip(fetched) {
        let outcome = match result {
            Ok(raw) => builder.add_raw(file, &raw).map(|c| c.question_count()),
            Err(e) => {
                builder.record_failure();
                Err(e)
            }
        };
        match outcome {
            Ok(count) => info!(file = %file, questions = count, "loaded category"),
            Err(e) => warn!(error = %e, "skipping category file"),
        }
    }

    let index = builder.build()?;
    info!(
        categories = index.category_count(),
        questions = index.total_questions(),
        "question index ready"
    );
    Ok(index)
}

// ============================================================================
// Tests
// ============================================================================
