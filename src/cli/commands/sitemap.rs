//! `sitemap` command

use crate::cli::args::SitemapArgs;
use crate::config::GuideConfig;
use crate::error::GuideError;
use crate::marketing::{build_entries, render_sitemap, write_sitemap};

/// Generate the sitemap for the landing page and every ordered category.
///
/// # Errors
///
/// Returns a marketing error for an invalid site URL and an I/O error if
/// the output cannot be written.
pub fn run(args: &SitemapArgs, settings: &GuideConfig) -> Result<(), GuideError> {
    let site_url = args.site_url.as_deref().unwrap_or_else(|| settings.site_url());
    let order = settings.category_order();
    let slugs = order.slugs();

    let entries = build_entries(site_url, slugs.as_slice(), chrono::Utc::now().date_naive())?;
    write_sitemap(&args.output, &render_sitemap(&entries))?;

    tracing::info!(output = %args.output.display(), urls = entries.len(), "sitemap generated");
    println!(
        "Sitemap written to {} ({} URLs)",
        args.output.display(),
        entries.len()
    );
    Ok(())
}
