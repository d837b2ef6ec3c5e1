//! Campaign link generation
//!
//! Reads a simple headered CSV of campaign rows and produces the final
//! tracking URL for each. The CSV dialect is deliberately minimal: no
//! quoting, cells split on every comma.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use reqwest::Url;
use tracing::debug;

use crate::error::{GuideError, MarketingError};

type UrlParseError = <Url as std::str::FromStr>::Err;

/// One CSV record, keyed by header in column order.
pub type Row = IndexMap<String, String>;

/// UTM parameters copied from a row onto its URL, in order.
pub const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
];

/// Output header used when there are no rows to take one from.
pub const DEFAULT_HEADER: [&str; 9] = [
    "base_url",
    "path",
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
    "notes",
    "final_url",
];

/// File name of the JSON output inside the output directory.
pub const JSON_OUTPUT: &str = "utm-links.json";
/// File name of the CSV output inside the output directory.
pub const CSV_OUTPUT: &str = "utm-links.csv";

/// Parses headered CSV text into records.
///
/// Blank lines are dropped. Headers and cells are trimmed and a missing
/// trailing cell becomes an empty string.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<Row> {
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let cell = cells.get(i).map_or("", |c| c.trim());
                    ((*h).to_string(), cell.to_string())
                })
                .collect()
        })
        .collect()
}

/// Appends `/` unless already present.
#[must_use]
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Resolves `path` against `base` and sets the row's UTM parameters.
///
/// An empty path resolves to `/`. Each non-blank UTM value replaces an
/// existing parameter of the same name in place, or is appended.
///
/// # Errors
///
/// Returns `MarketingError::InvalidUrl` naming `row_number` if the base
/// URL cannot be parsed or the path cannot be resolved.
pub fn build_url(
    base: &str,
    path: &str,
    row: &Row,
    row_number: usize,
) -> Result<String, MarketingError> {
    let invalid = |e: UrlParseError| MarketingError::InvalidUrl {
        row: row_number,
        message: e.to_string(),
    };

    let base = Url::parse(&ensure_trailing_slash(base)).map_err(invalid)?;
    let mut url = base
        .join(if path.is_empty() { "/" } else { path })
        .map_err(invalid)?;

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut changed = false;

    for key in UTM_KEYS {
        let Some(value) = row.get(key).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        set_param(&mut pairs, key, value);
        changed = true;
    }

    if changed {
        url.query_pairs_mut().clear().extend_pairs(&pairs);
    }

    Ok(url.to_string())
}

// First match is replaced in place, later duplicates are removed.
fn set_param(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter().position(|(k, _)| k == key) {
        Some(first) => {
            pairs[first].1 = value.to_string();
            let mut i = 0;
            pairs.retain(|(k, _)| {
                let keep = i <= first || k != key;
                i += 1;
                keep
            });
        }
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

/// Adds a `final_url` field to every row.
///
/// # Errors
///
/// Returns the first row whose URL cannot be built.
pub fn generate_links(rows: Vec<Row>) -> Result<Vec<Row>, MarketingError> {
    rows.into_iter()
        .enumerate()
        .map(|(i, mut row)| {
            let base = row.get("base_url").map_or("", String::as_str);
            let path = row.get("path").map_or("", String::as_str);
            let final_url = build_url(base, path, &row, i + 1)?;
            debug!(row = i + 1, %final_url, "built campaign link");
            row.insert("final_url".to_string(), final_url);
            Ok(row)
        })
        .collect()
}

/// Renders links as CSV with the header taken from the first record.
#[must_use]
pub fn render_csv(links: &[Row]) -> String {
    let headers: Vec<&str> = links.first().map_or_else(
        || DEFAULT_HEADER.to_vec(),
        |first| first.keys().map(String::as_str).collect(),
    );

    let mut lines = Vec::with_capacity(links.len() + 1);
    lines.push(headers.join(","));
    for row in links {
        let cells: Vec<&str> = headers
            .iter()
            .map(|h| row.get(*h).map_or("", String::as_str))
            .collect();
        lines.push(cells.join(","));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes `utm-links.json` and `utm-links.csv` into `out_dir`.
///
/// Returns the two written paths (JSON first).
///
/// # Errors
///
/// Returns an error if the directory or either file cannot be written.
pub fn write_outputs(links: &[Row], out_dir: &Path) -> Result<(PathBuf, PathBuf), GuideError> {
    std::fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join(JSON_OUTPUT);
    let mut json = serde_json::to_string_pretty(links)?;
    json.push('\n');
    std::fs::write(&json_path, json)?;

    let csv_path = out_dir.join(CSV_OUTPUT);
    std::fs::write(&csv_path, render_csv(links))?;

    Ok((json_path, csv_path))
}
