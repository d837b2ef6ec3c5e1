//! `route` command
//!
//! Shows which view a deep link opens against the loaded categories.

use crate::cli::args::{OutputFormat, RouteArgs};
use crate::cli::commands::load_catalog;
use crate::config::GuideConfig;
use crate::error::GuideError;
use crate::route::{Route, resolve_route};

/// Resolve a deep link and print the view.
///
/// # Errors
///
/// Returns an error if the index cannot be loaded.
pub async fn run(args: &RouteArgs, settings: &GuideConfig) -> Result<(), GuideError> {
    let index = load_catalog(&args.source, settings).await?;
    let route = resolve_route(&args.link, &index);
    tracing::debug!(link = %args.link, %route, "resolved deep link");

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&route)?),
        OutputFormat::Human => match &route {
            Route::Topic(slug) => {
                let name = index.category(slug).map_or(slug.as_str(), |c| c.category.as_str());
                println!("topic {slug} ({name})");
            }
            other => println!("{other}"),
        },
    }

    Ok(())
}
