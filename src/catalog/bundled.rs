//! Category files embedded in the binary at compile time.
//!
//! The bundled set is the default data source, so the CLI works with no
//! data directory or network access.

/// One category file compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct BundledFile {
    /// File name, e.g. `q-rag.json`.
    pub name: &'static str,

    /// Raw JSON content.
    pub json: &'static str,
}

/// Every bundled category file, in discovery order.
pub static BUNDLED_FILES: &[BundledFile] = &[
    BundledFile {
        name: "q-agent.json",
        json: include_str!("../../questions/q-agent.json"),
    },
    BundledFile {
        name: "q-ai-product.json",
        json: include_str!("../../questions/q-ai-product.json"),
    },
    BundledFile {
        name: "q-rag.json",
        json: include_str!("../../questions/q-rag.json"),
    },
    BundledFile {
        name: "q-model-optimization.json",
        json: include_str!("../../questions/q-model-optimization.json"),
    },
    BundledFile {
        name: "q-agentic-techniques.json",
        json: include_str!("../../questions/q-agentic-techniques.json"),
    },
    BundledFile {
        name: "q-prompt-engineering.json",
        json: include_str!("../../questions/q-prompt-engineering.json"),
    },
    BundledFile {
        name: "q-context-engineering.json",
        json: include_str!("../../questions/q-context-engineering.json"),
    },
    BundledFile {
        name: "q-evaluation.json",
        json: include_str!("../../questions/q-evaluation.json"),
    },
    BundledFile {
        name: "q-responsible-ai.json",
        json: include_str!("../../questions/q-responsible-ai.json"),
    },
    BundledFile {
        name: "q-ai-ux.json",
        json: include_str!("../../questions/q-ai-ux.json"),
    },
    BundledFile {
        name: "q-feedback-loops.json",
        json: include_str!("../../questions/q-feedback-loops.json"),
    },
    BundledFile {
        name: "q-multimodal.json",
        json: include_str!("../../questions/q-multimodal.json"),
    },
    BundledFile {
        name: "q-rapid-prototyping.json",
        json: include_str!("../../questions/q-rapid-prototyping.json"),
    },
];

/// Looks up a bundled file by exact name.
#[must_use]
pub fn find_bundled(name: &str) -> Option<&'static BundledFile> {
    BUNDLED_FILES.iter().find(|f| f.name == name)
}

/// Names of the bundled files in discovery order.
#[must_use]
pub fn bundled_file_names() -> Vec<&'static str> {
    BUNDLED_FILES.iter().map(|f| f.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::catalog::order::CategoryOrder;
    use crate::catalog::schema::CategoryData;
    use crate::catalog::slug::slugify;
    use crate::catalog::validation::Validator;
    use crate::config::DEFAULT_QUESTION_FILES;

    #[test]
    fn all_bundled_files_parse_and_validate_cleanly() {
        let mut validator = Validator::new();
        for file in BUNDLED_FILES {
            let data: CategoryData = serde_json::from_str(file.json)
                .unwrap_or_else(|e| panic!("bundled file '{}' failed to parse: {e}", file.name));
            let result = validator.validate(&data);
            assert!(
                result.is_valid() && result.warnings.is_empty(),
                "bundled file '{}' has issues: {:?} {:?}",
                file.name,
                result.errors,
                result.warnings
            );
        }
    }

    #[test]
    fn no_duplicate_file_names() {
        let names = bundled_file_names();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn bundled_slugs_are_all_in_display_order() {
        let order = CategoryOrder::default();
        for file in BUNDLED_FILES {
            let data: CategoryData = serde_json::from_str(file.json).unwrap();
            let slug = slugify(&data.category);
            assert!(
                order.priority(&slug) < crate::catalog::order::UNLISTED_PRIORITY,
                "bundled category '{slug}' has no display priority"
            );
        }
    }

    #[test]
    fn bundled_set_matches_default_candidates() {
        assert_eq!(bundled_file_names(), DEFAULT_QUESTION_FILES);
    }

    #[test]
    fn find_bundled_existing_and_missing() {
        assert!(find_bundled("q-rag.json").is_some());
        assert!(find_bundled("q-nope.json").is_none());
    }
}
