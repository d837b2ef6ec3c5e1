//! Deep-link resolution
//!
//! Maps an incoming web path and query string onto the view the site
//! should open. Supports both path routes (`/about`, `/press`,
//! `/<slug>`) and the older query form (`?category=<slug>`, `?about=1`).
//! Slugs that name no loaded category fall through to the landing page
//! without an error.

use std::fmt;

use reqwest::Url;
use serde::Serialize;

use crate::catalog::QuestionIndex;

/// Base used to parse bare paths such as `/rag?about=1`.
const PLACEHOLDER_ORIGIN: &str = "http://localhost/";

/// View selected by a deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "category", rename_all = "lowercase")]
pub enum Route {
    /// Landing page with the domain overview.
    Landing,
    /// About page.
    About,
    /// Press kit page.
    Press,
    /// Question list for one category slug.
    Topic(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landing => f.write_str("landing"),
            Self::About => f.write_str("about"),
            Self::Press => f.write_str("press"),
            Self::Topic(slug) => write!(f, "topic {slug}"),
        }
    }
}

/// Resolves a full URL or a path with optional query to a [`Route`].
///
/// Precedence: about (path or `about=1`), then `/press`, then a known
/// path slug, then a known `category` query value, then landing.
#[must_use]
pub fn resolve_route(link: &str, index: &QuestionIndex) -> Route {
    let Some(url) = parse_link(link) else {
        return Route::Landing;
    };

    let path = url.path().trim_end_matches('/');
    let query = |key: &str| {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    };

    if path == "/about" || query("about").as_deref() == Some("1") {
        return Route::About;
    }

    if path == "/press" {
        return Route::Press;
    }

    let path_slug = path.trim_start_matches('/');
    if !path_slug.is_empty() && index.category(path_slug).is_some() {
        return Route::Topic(path_slug.to_string());
    }

    match query("category") {
        Some(slug) if index.category(&slug).is_some() => Route::Topic(slug),
        _ => Route::Landing,
    }
}

fn parse_link(link: &str) -> Option<Url> {
    Url::parse(link).ok().or_else(|| {
        let base = Url::parse(PLACEHOLDER_ORIGIN).ok()?;
        base.join(link).ok()
    })
}
