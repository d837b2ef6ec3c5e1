//! `questions` command
//!
//! Filtered question listing, the command-line counterpart of the site's
//! topic view with its level selector and search box.

use crate::catalog::{QuestionFilter, QuestionIndex, filter_questions};
use crate::cli::args::{OutputFormat, QuestionsArgs};
use crate::cli::commands::load_catalog;
use crate::config::GuideConfig;
use crate::error::GuideError;

/// List questions matching the topic, level and search options.
///
/// # Errors
///
/// Returns an error if the index cannot be loaded or output
/// serialization fails.
pub async fn run(args: &QuestionsArgs, settings: &GuideConfig) -> Result<(), GuideError> {
    let index = load_catalog(&args.source, settings).await?;
    let filter = build_filter(args);

    if let Some(topic) = filter.topic.as_deref() {
        warn_unknown_topic(&index, topic);
    }

    let matches = filter_questions(index.questions(), &filter);
    tracing::debug!(
        total = index.total_questions(),
        matched = matches.len(),
        "applied question filter"
    );

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No questions match the given filters.");
                return Ok(());
            }

            let heading = filter
                .topic
                .as_deref()
                .and_then(|slug| index.category(slug))
                .map_or("All categories", |c| c.category.as_str());
            println!("{heading} ({} questions)", matches.len());
            if let Some(level) = args.level.skill_level() {
                println!("{} Questions: {}", level.display_name(), level.description());
            }
            println!();

            for q in &matches {
                println!("  {:<14}{}", q.skill_level, q.question);
            }
        }
    }

    Ok(())
}

fn build_filter(args: &QuestionsArgs) -> QuestionFilter {
    let mut filter = QuestionFilter::new().with_level(args.level.to_filter());
    if let Some(topic) = &args.topic {
        filter = filter.with_topic(topic.clone());
    }
    if let Some(search) = &args.search {
        filter = filter.with_search(search.clone());
    }
    filter
}

fn warn_unknown_topic(index: &QuestionIndex, topic: &str) {
    if index.category(topic).is_some() {
        return;
    }
    match index.suggest_category(topic) {
        Some(suggestion) => {
            tracing::warn!(topic, "unknown topic, did you mean '{suggestion}'?");
        }
        None => tracing::warn!(topic, "unknown topic"),
    }
}
