//! Marketing artifacts
//!
//! Generators for the search-engine sitemap and the campaign (UTM) link
//! list. Both are plain file-in, file-out transforms.

pub mod sitemap;
pub mod utm;

pub use sitemap::{SitemapEntry, build_entries, render_sitemap, write_sitemap};
pub use utm::{
    DEFAULT_HEADER, build_url, ensure_trailing_slash, generate_links, parse_csv, write_outputs,
};
