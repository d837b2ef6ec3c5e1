//! Category display order
//!
//! A static slug -> priority table drives the order categories are shown
//! in navigation. Slugs missing from the table sort after every listed
//! slug and keep their load order among themselves.

use indexmap::IndexMap;

use crate::catalog::schema::LoadedCategory;

/// Priority assigned to slugs absent from the table.
pub const UNLISTED_PRIORITY: u32 = 999;

/// Built-in display order, most fundamental topics first.
const DEFAULT_ORDER: &[(&str, u32)] = &[
    ("prompt-engineering", 1),
    ("context-engineering", 2),
    ("retrieval-augmented-generation-rag", 3),
    ("ai-model-api-selection-product-lens", 4),
    ("ai-agent-engineering", 5),
    ("agentic-techniques", 6),
    ("model-optimization", 7),
    ("ai-system-evaluation", 8),
    ("responsible-ai", 9),
    ("ai-ux-design", 10),
    ("feedback-loops", 11),
    ("rapid-prototyping", 12),
    ("multimodal-ai", 13),
];

/// Slug -> priority table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    priorities: IndexMap<String, u32>,
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self::new(
            DEFAULT_ORDER
                .iter()
                .map(|(slug, priority)| ((*slug).to_string(), *priority)),
        )
    }
}

impl CategoryOrder {
    /// Builds a table from `(slug, priority)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (String, u32)>) -> Self {
        Self {
            priorities: entries.into_iter().collect(),
        }
    }

    /// Priority for `slug`; unlisted slugs and a configured `0` both get
    /// [`UNLISTED_PRIORITY`].
    #[must_use]
    pub fn priority(&self, slug: &str) -> u32 {
        match self.priorities.get(slug) {
            Some(&p) if p > 0 => p,
            _ => UNLISTED_PRIORITY,
        }
    }

    /// Configured slugs in ascending priority.
    #[must_use]
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<(&str, u32)> = self
            .priorities
            .iter()
            .map(|(slug, _)| (slug.as_str(), self.priority(slug)))
            .collect();
        slugs.sort_by_key(|&(_, priority)| priority);
        slugs.into_iter().map(|(slug, _)| slug).collect()
    }

    /// Number of configured slugs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    /// Returns `true` when no slug is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}

/// Returns categories in display order.
///
/// `sort_by_key` is stable, so equal priorities keep the map's insertion
/// order and repeated calls on the same input agree.
#[must_use]
pub fn sorted_entries<'a>(
    categories: &'a IndexMap<String, LoadedCategory>,
    order: &CategoryOrder,
) -> Vec<(&'a str, &'a LoadedCategory)> {
    let mut entries: Vec<(&str, &LoadedCategory)> = categories
        .iter()
        .map(|(slug, category)| (slug.as_str(), category))
        .collect();
    entries.sort_by_key(|(slug, _)| order.priority(slug));
    entries
}
