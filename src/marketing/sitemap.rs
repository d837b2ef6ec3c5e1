//! XML sitemap generation.

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::MarketingError;

/// Sitemap protocol namespace.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Absolute page URL with the category slug percent-encoded.
    pub loc: String,
    /// `YYYY-MM-DD`.
    pub lastmod: String,
    /// `weekly` for the landing page, `monthly` for category pages.
    pub changefreq: &'static str,
    /// Relative priority in `0.0..=1.0`.
    pub priority: f32,
    /// Category slug for category pages, `None` for the landing page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Builds the landing entry followed by one entry per category slug.
///
/// # Errors
///
/// Returns `MarketingError::InvalidUrl` if `site_url` is not an absolute
/// URL.
pub fn build_entries<S: AsRef<str>>(
    site_url: &str,
    slugs: &[S],
    date: NaiveDate,
) -> Result<Vec<SitemapEntry>, MarketingError> {
    reqwest::Url::parse(site_url).map_err(|e| MarketingError::InvalidUrl {
        row: 0,
        message: format!("site URL '{site_url}': {e}"),
    })?;

    let site = site_url.trim_end_matches('/');
    let lastmod = date.format("%Y-%m-%d").to_string();

    let mut entries = Vec::with_capacity(slugs.len() + 1);
    entries.push(SitemapEntry {
        loc: format!("{site}/"),
        lastmod: lastmod.clone(),
        changefreq: "weekly",
        priority: 1.0,
        category: None,
    });

    for slug in slugs {
        let slug = slug.as_ref();
        entries.push(SitemapEntry {
            loc: format!("{site}/?category={}", urlencoding::encode(slug)),
            lastmod: lastmod.clone(),
            changefreq: "monthly",
            priority: 0.8,
            category: Some(slug.to_string()),
        });
    }

    Ok(entries)
}

/// Renders entries as a sitemap-protocol XML document.
#[must_use]
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NAMESPACE}\">");

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            xml.push('\n');
        }
        match &entry.category {
            Some(slug) => {
                let _ = writeln!(xml, "  <!-- Category: {} -->", escape_comment(slug));
            }
            None => xml.push_str("  <!-- Main Landing Page -->\n"),
        }
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.loc));
        let _ = writeln!(xml, "    <lastmod>{}</lastmod>", entry.lastmod);
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq);
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Writes `xml` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an I/O error if the directory or file cannot be written.
pub fn write_sitemap(path: &Path, xml: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, xml)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// "--" may not appear inside an XML comment.
fn escape_comment(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("--") {
        out = out.replace("--", "-");
    }
    out
}
