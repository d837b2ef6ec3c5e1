//! `interview-guide` - question catalog and site tooling
//!
//! Loads the interview-question category files into a searchable index
//! and generates the artifacts the static site is deployed with: the
//! compiled question bundle, the XML sitemap, and campaign links.

pub mod catalog;
pub mod cli;
pub mod compile;
pub mod config;
pub mod error;
pub mod marketing;
pub mod observability;
pub mod route;
