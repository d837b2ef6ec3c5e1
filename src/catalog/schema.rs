//! Category and question types.
//!
//! `CategoryData` is the on-disk shape of one category file. It is parsed
//! with serde so that missing or mistyped fields are rejected at the load
//! boundary; semantic checks live in [`crate::catalog::validation`].

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of [`Question::kind`] for every question in the catalog.
pub const QUESTION_TYPE: &str = "interview-question";

// ============================================================================
// Skill Levels
// ============================================================================

/// Difficulty tier of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    /// Fundamental concepts.
    Novice,
    /// Practical experience.
    Intermediate,
    /// Advanced system design.
    Expert,
    /// Strategic thinking and leadership.
    Master,
}

impl SkillLevel {
    /// All levels in ascending difficulty.
    pub const ALL: [Self; 4] = [Self::Novice, Self::Intermediate, Self::Expert, Self::Master];

    /// Matches a source-file level key, ignoring case.
    #[must_use]
    pub fn parse_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(key))
    }

    /// The normalized (lowercase) level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
            Self::Master => "master",
        }
    }

    /// Title-case label for display.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
            Self::Master => "Master",
        }
    }

    /// One-line description of what the tier covers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Novice => "Fundamental concepts and basic understanding",
            Self::Intermediate => "Practical experience and technical skills",
            Self::Expert => "Advanced system design and architecture",
            Self::Master => "Strategic thinking and leadership",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Category Data
// ============================================================================

/// One category file: a display name and questions grouped by level.
///
/// Level keys keep the file's own casing and order; normalization
/// lower-cases them when questions are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    /// Display name, e.g. "Prompt Engineering".
    pub category: String,

    /// Question texts keyed by level, in file order.
    pub questions: IndexMap<String, Vec<String>>,
}

impl CategoryData {
    /// Total number of question texts across all levels.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.values().map(Vec::len).sum()
    }
}

/// A category as stored in the index, tagged with its slug and source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedCategory {
    /// Display name.
    pub category: String,

    /// Question texts keyed by level, in file order.
    pub questions: IndexMap<String, Vec<String>>,

    /// Slug derived from the display name.
    pub slug: String,

    /// File the category was loaded from.
    pub file_name: String,
}

impl LoadedCategory {
    /// Tags parsed category data with its slug and origin.
    #[must_use]
    pub fn new(data: CategoryData, slug: String, file_name: String) -> Self {
        Self {
            category: data.category,
            questions: data.questions,
            slug,
            file_name,
        }
    }

    /// Total number of question texts across all levels.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.values().map(Vec::len).sum()
    }
}

// ============================================================================
// Questions
// ============================================================================

/// One normalized interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// `{slug}-{level}-{counter}`, unique across the index.
    pub id: String,

    /// Lowercased level name.
    pub skill_level: String,

    /// Category slug.
    pub category: String,

    /// Category display name.
    pub category_name: String,

    /// Question text exactly as it appears in the source file.
    pub question: String,

    /// Always [`QUESTION_TYPE`].
    #[serde(rename = "type")]
    pub kind: String,

    /// Reserved; always empty.
    pub topics: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_ignores_case() {
        assert_eq!(SkillLevel::parse_key("Novice"), Some(SkillLevel::Novice));
        assert_eq!(SkillLevel::parse_key("EXPERT"), Some(SkillLevel::Expert));
        assert_eq!(SkillLevel::parse_key("master"), Some(SkillLevel::Master));
        assert_eq!(SkillLevel::parse_key("guru"), None);
        assert_eq!(SkillLevel::parse_key(""), None);
    }

    #[test]
    fn level_labels() {
        assert_eq!(SkillLevel::Intermediate.to_string(), "intermediate");
        assert_eq!(SkillLevel::Intermediate.display_name(), "Intermediate");
        assert!(SkillLevel::Master.description().contains("leadership"));
    }

    #[test]
    fn category_data_keeps_level_order() {
        let data: CategoryData = serde_json::from_str(
            r#"{"category":"RAG","questions":{"Novice":["Q1","Q2"],"Expert":["Q3"],"Intermediate":[]}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = data.questions.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Novice", "Expert", "Intermediate"]);
        assert_eq!(data.question_count(), 3);
    }

    #[test]
    fn category_data_ignores_extra_fields() {
        let data: CategoryData = serde_json::from_str(
            r#"{"category":"RAG","version":2,"questions":{"Novice":["Q1"]}}"#,
        )
        .unwrap();
        assert_eq!(data.category, "RAG");
    }

    #[test]
    fn category_data_requires_questions() {
        let result: Result<CategoryData, _> = serde_json::from_str(r#"{"category":"RAG"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn question_serializes_with_web_field_names() {
        let question = Question {
            id: "rag-novice-1".to_string(),
            skill_level: "novice".to_string(),
            category: "rag".to_string(),
            category_name: "RAG".to_string(),
            question: "Q1".to_string(),
            kind: QUESTION_TYPE.to_string(),
            topics: Vec::new(),
        };
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["skillLevel"], "novice");
        assert_eq!(value["categoryName"], "RAG");
        assert_eq!(value["type"], "interview-question");
        assert_eq!(value["topics"], serde_json::json!([]));
    }

    #[test]
    fn loaded_category_serializes_file_name() {
        let data = CategoryData {
            category: "RAG".to_string(),
            questions: IndexMap::new(),
        };
        let loaded = LoadedCategory::new(data, "rag".to_string(), "q-rag.json".to_string());
        let value = serde_json::to_value(&loaded).unwrap();
        assert_eq!(value["fileName"], "q-rag.json");
        assert_eq!(value["slug"], "rag");
    }
}
