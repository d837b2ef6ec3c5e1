//! `categories` command
//!
//! Sorted category view with per-category question counts.

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::{QuestionIndex, SkillLevel};
use crate::cli::args::{CategoriesArgs, OutputFormat};
use crate::cli::commands::load_catalog;
use crate::config::GuideConfig;
use crate::error::GuideError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRow<'a> {
    slug: &'a str,
    name: &'a str,
    priority: u32,
    question_count: usize,
    levels: IndexMap<&'static str, usize>,
    file_name: &'a str,
}

/// Question count per level, in level order, for one category or the
/// whole index.
fn level_counts(index: &QuestionIndex, slug: Option<&str>) -> IndexMap<&'static str, usize> {
    SkillLevel::ALL
        .into_iter()
        .map(|level| {
            let count = match slug {
                Some(slug) => index
                    .questions()
                    .iter()
                    .filter(|q| q.category == slug && q.skill_level == level.as_str())
                    .count(),
                None => index.count_for_level(level.as_str()),
            };
            (level.as_str(), count)
        })
        .collect()
}

/// Print categories in display order.
///
/// # Errors
///
/// Returns an error if the index cannot be loaded or output
/// serialization fails.
pub async fn run(args: &CategoriesArgs, settings: &GuideConfig) -> Result<(), GuideError> {
    let index = load_catalog(&args.source, settings).await?;
    let order = settings.category_order();

    let rows: Vec<CategoryRow<'_>> = index
        .sorted_categories(&order)
        .into_iter()
        .map(|(slug, category)| CategoryRow {
            slug,
            name: &category.category,
            priority: order.priority(slug),
            question_count: index.count_for_category(slug),
            levels: level_counts(&index, Some(slug)),
            file_name: &category.file_name,
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "categories": rows,
                "totalQuestions": index.total_questions(),
                "levels": level_counts(&index, None),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Human => {
            println!("Categories ({} loaded)\n", rows.len());
            for row in &rows {
                println!(
                    "  {:<40}{:<40}{:>4}",
                    row.name, row.slug, row.question_count
                );
            }
            println!(
                "\n{} questions across {} categories",
                index.total_questions(),
                index.category_count()
            );
            for level in SkillLevel::ALL {
                println!(
                    "  {:<14}{:>4}",
                    level.display_name(),
                    index.count_for_level(level.as_str())
                );
            }
        }
    }

    Ok(())
}
