//! Category file validation
//!
//! Runs after serde has accepted the document shape. Collects every issue
//! instead of stopping at the first so `validate` can report a file in one
//! pass.

use std::collections::{HashMap, HashSet};

use crate::catalog::schema::{CategoryData, SkillLevel};
use crate::catalog::slug::slugify;
use crate::error::{Severity, ValidationIssue};

// ============================================================================
// Public API
// ============================================================================

/// Result of validating one category.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Issues that reject the file.
    pub errors: Vec<ValidationIssue>,

    /// Issues that are reported but tolerated.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Promotes every warning to an error.
    #[must_use]
    pub fn into_strict(mut self) -> Self {
        for mut warning in self.warnings.drain(..) {
            warning.severity = Severity::Error;
            self.errors.push(warning);
        }
        self
    }
}

/// Category validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a parsed category and returns every issue found.
    pub fn validate(&mut self, data: &CategoryData) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_name(data);
        self.validate_levels(data);
        self.validate_texts(data);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Checks
    // ========================================================================

    fn validate_name(&mut self, data: &CategoryData) {
        if data.category.trim().is_empty() {
            self.add_error("category", "category name is required and cannot be empty");
        } else if slugify(&data.category).trim_matches('-').is_empty() {
            self.add_error(
                "category",
                &format!(
                    "category name '{}' produces an empty slug",
                    data.category
                ),
            );
        }
    }

    fn validate_levels(&mut self, data: &CategoryData) {
        let mut seen: HashMap<SkillLevel, &str> = HashMap::new();

        for (key, texts) in &data.questions {
            let path = format!("questions.{key}");
            match SkillLevel::parse_key(key) {
                None => self.add_error(
                    &path,
                    &format!(
                        "unknown skill level '{key}', expected one of novice, intermediate, expert, master"
                    ),
                ),
                Some(level) => {
                    if let Some(previous) = seen.insert(level, key) {
                        self.add_warning(
                            &path,
                            &format!("level '{key}' repeats '{previous}' with different casing"),
                        );
                    }
                }
            }

            if texts.is_empty() {
                self.add_warning(&path, "level has no questions");
            }
        }

        if data.question_count() == 0 {
            self.add_warning("questions", "category has no questions");
        }
    }

    fn validate_texts(&mut self, data: &CategoryData) {
        let mut seen: HashSet<&str> = HashSet::new();

        for (key, texts) in &data.questions {
            for (i, text) in texts.iter().enumerate() {
                let path = format!("questions.{key}[{i}]");
                if text.trim().is_empty() {
                    self.add_error(&path, "question text is empty");
                    continue;
                }
                if text.trim() != text {
                    self.add_warning(&path, "question text has leading or trailing whitespace");
                }
                if !seen.insert(text.as_str()) {
                    self.add_warning(&path, "duplicate question text within category");
                }
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
