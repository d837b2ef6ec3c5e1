//! Flattens a category's level map into question records.

use crate::catalog::schema::{CategoryData, QUESTION_TYPE, Question};

/// Converts one category into its ordered list of questions.
///
/// Levels are visited in the map's own order and texts in sequence order.
/// A single counter runs across all levels of the category, so ids look
/// like `rag-novice-1`, `rag-novice-2`, `rag-expert-3`. Question text is
/// copied verbatim.
#[must_use]
pub fn normalize_category(data: &CategoryData, slug: &str) -> Vec<Question> {
    let mut questions = Vec::with_capacity(data.question_count());
    let mut counter = 1usize;

    for (level, texts) in &data.questions {
        let level = level.to_lowercase();
        for text in texts {
            questions.push(Question {
                id: format!("{slug}-{level}-{counter}"),
                skill_level: level.clone(),
                category: slug.to_string(),
                category_name: data.category.clone(),
                question: text.clone(),
                kind: QUESTION_TYPE.to_string(),
                topics: Vec::new(),
            });
            counter += 1;
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rag() -> CategoryData {
        serde_json::from_str(
            r#"{"category":"RAG","questions":{"Novice":["Q1","Q2"],"Expert":["Q3"]}}"#,
        )
        .unwrap()
    }

    #[test]
    fn counter_is_shared_across_levels() {
        let questions = normalize_category(&rag(), "rag");
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["rag-novice-1", "rag-novice-2", "rag-expert-3"]);
    }

    #[test]
    fn fields_are_populated() {
        let questions = normalize_category(&rag(), "rag");
        let last = &questions[2];
        assert_eq!(last.skill_level, "expert");
        assert_eq!(last.category, "rag");
        assert_eq!(last.category_name, "RAG");
        assert_eq!(last.question, "Q3");
        assert_eq!(last.kind, QUESTION_TYPE);
        assert!(last.topics.is_empty());
    }

    #[test]
    fn empty_levels_emit_nothing() {
        let data: CategoryData = serde_json::from_str(
            r#"{"category":"RAG","questions":{"Novice":[],"Master":["Q1"]}}"#,
        )
        .unwrap();
        let questions = normalize_category(&data, "rag");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "rag-master-1");
    }

    #[test]
    fn text_is_preserved_verbatim() {
        let data: CategoryData = serde_json::from_str(
            r#"{"category":"RAG","questions":{"Novice":["  <b>Why</b> RAG?  "]}}"#,
        )
        .unwrap();
        let questions = normalize_category(&data, "rag");
        assert_eq!(questions[0].question, "  <b>Why</b> RAG?  ");
    }

    #[test]
    fn mixed_case_keys_are_lowercased() {
        let data: CategoryData = serde_json::from_str(
            r#"{"category":"RAG","questions":{"INTERMEDIATE":["Q1"]}}"#,
        )
        .unwrap();
        let questions = normalize_category(&data, "rag");
        assert_eq!(questions[0].skill_level, "intermediate");
        assert_eq!(questions[0].id, "rag-intermediate-1");
    }
}
