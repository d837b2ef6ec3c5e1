//! Topic / level / free-text question filtering.

use std::fmt;
use std::str::FromStr;

use crate::catalog::schema::Question;

/// Sentinel that disables the level filter.
pub const ALL_LEVELS: &str = "all";

/// Skill level selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LevelFilter {
    /// Matches every level.
    #[default]
    All,
    /// Matches questions whose level equals this string exactly.
    Level(String),
}

impl LevelFilter {
    fn matches(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Level(level) => question.skill_level == *level,
        }
    }
}

impl FromStr for LevelFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL_LEVELS {
            Self::All
        } else {
            Self::Level(s.to_string())
        })
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_LEVELS),
            Self::Level(level) => f.write_str(level),
        }
    }
}

/// Combined filter; every unset part matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Category slug to keep.
    pub topic: Option<String>,

    /// Skill level to keep.
    pub level: LevelFilter,

    /// Case-insensitive text to look for in the question.
    pub search: Option<String>,
}

impl QuestionFilter {
    /// A filter that keeps every question.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one category slug.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Restricts to one skill level.
    #[must_use]
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Restricts to questions containing `text`.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Returns `true` when no part of the filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topic.is_none() && self.level == LevelFilter::All && self.needle().is_none()
    }

    /// Tests one question against all active parts.
    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        self.matches_with(question, self.needle().as_deref())
    }

    /// `matches` with the lowercased search text already computed.
    fn matches_with(&self, question: &Question, needle: Option<&str>) -> bool {
        self.topic
            .as_deref()
            .is_none_or(|topic| question.category == topic)
            && self.level.matches(question)
            && needle.is_none_or(|needle| question.question.to_lowercase().contains(needle))
    }

    /// Lowercased search text, or `None` when it is unset or blank.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(str::to_lowercase)
    }
}

/// Keeps the questions matching `filter`, in their original order.
///
/// An empty result is a normal outcome, not an error.
#[must_use]
pub fn filter_questions<'a>(questions: &'a [Question], filter: &QuestionFilter) -> Vec<&'a Question> {
    let needle = filter.needle();
    questions
        .iter()
        .filter(|q| filter.matches_with(q, needle.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::schema::QUESTION_TYPE;

    fn question(id: &str, category: &str, level: &str, text: &str) -> Question {
        Question {
            id: id.to_string(),
            skill_level: level.to_string(),
            category: category.to_string(),
            category_name: category.to_uppercase(),
            question: text.to_string(),
            kind: QUESTION_TYPE.to_string(),
            topics: Vec::new(),
        }
    }

    fn sample() -> Vec<Question> {
        vec![
            question("rag-novice-1", "rag", "novice", "What is a RAG system?"),
            question("rag-expert-2", "rag", "expert", "Tune chunk sizes"),
            question("evals-novice-1", "evals", "novice", "Why evaluate a rag pipeline?"),
            question("evals-master-2", "evals", "master", "Design an eval program"),
        ]
    }

    fn ids<'a>(questions: &[&'a Question]) -> Vec<&'a str> {
        questions.iter().map(|q| q.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let qs = sample();
        let filter = QuestionFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter_questions(&qs, &filter).len(), 4);
    }

    #[test]
    fn topic_is_exact() {
        let qs = sample();
        let result = filter_questions(&qs, &QuestionFilter::new().with_topic("rag"));
        assert_eq!(ids(&result), ["rag-novice-1", "rag-expert-2"]);

        let result = filter_questions(&qs, &QuestionFilter::new().with_topic("ra"));
        assert!(result.is_empty());
    }

    #[test]
    fn level_is_exact_and_case_sensitive() {
        let qs = sample();
        let novice = "novice".parse::<LevelFilter>().unwrap();
        let result = filter_questions(&qs, &QuestionFilter::new().with_level(novice));
        assert_eq!(ids(&result), ["rag-novice-1", "evals-novice-1"]);

        let capitalized = LevelFilter::Level("Novice".to_string());
        let result = filter_questions(&qs, &QuestionFilter::new().with_level(capitalized));
        assert!(result.is_empty());
    }

    #[test]
    fn all_sentinel_parses() {
        assert_eq!("all".parse::<LevelFilter>().unwrap(), LevelFilter::All);
        assert_eq!(LevelFilter::All.to_string(), "all");
    }

    #[test]
    fn search_is_case_insensitive() {
        let qs = sample();
        let result = filter_questions(&qs, &QuestionFilter::new().with_search("rag"));
        assert_eq!(ids(&result), ["rag-novice-1", "evals-novice-1"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let qs = sample();
        let filter = QuestionFilter::new().with_search("   ");
        assert!(filter.is_empty());
        assert_eq!(filter_questions(&qs, &filter).len(), 4);
    }

    #[test]
    fn combined_filters() {
        let qs = sample();
        let filter = QuestionFilter::new()
            .with_topic("evals")
            .with_level(LevelFilter::Level("novice".to_string()))
            .with_search("RAG");
        let result = filter_questions(&qs, &filter);
        assert_eq!(ids(&result), ["evals-novice-1"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let qs = sample();
        let result = filter_questions(&qs, &QuestionFilter::new().with_search("kubernetes"));
        assert!(result.is_empty());
    }

    #[test]
    fn matches_agrees_with_filter_questions() {
        let qs = sample();
        let filters = [
            QuestionFilter::new().with_search("design"),
            QuestionFilter::new().with_search("  RAG "),
            QuestionFilter::new()
                .with_topic("rag")
                .with_level(LevelFilter::Level("expert".to_string())),
            QuestionFilter::new().with_topic("evals").with_search("   "),
        ];
        for filter in &filters {
            let by_matches: Vec<&Question> = qs.iter().filter(|q| filter.matches(q)).collect();
            assert_eq!(filter_questions(&qs, filter), by_matches, "{filter:?}");
        }
    }
}
