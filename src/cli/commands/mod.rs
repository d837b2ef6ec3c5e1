//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler and
//! holds the settings and data-source plumbing the handlers share.

pub mod categories;
pub mod compile;
pub mod completions;
pub mod questions;
pub mod route;
pub mod sitemap;
pub mod utm;
pub mod validate;
pub mod version;

use std::path::Path;

use crate::catalog::{
    BundledSource, CategorySource, DirSource, HttpSource, QuestionIndex, load_index,
};
use crate::cli::args::{Cli, Commands, SourceArgs};
use crate::config::{ConfigLoader, GuideConfig, Limits};
use crate::error::GuideError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the settings file is invalid or the dispatched
/// command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), GuideError> {
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Questions(args) => questions::run(&args, &settings).await,
        Commands::Categories(args) => categories::run(&args, &settings).await,
        Commands::Validate(args) => validate::run(&args).await,
        Commands::Compile(args) => compile::run(&args, &settings).await,
        Commands::Route(args) => route::run(&args, &settings).await,
        Commands::Sitemap(args) => sitemap::run(&args, &settings),
        Commands::Utm(args) => utm::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Loads the settings file, or built-in defaults when none is given.
///
/// # Errors
///
/// Returns a configuration error if the file is missing or invalid.
pub fn load_settings(path: Option<&Path>) -> Result<GuideConfig, GuideError> {
    let Some(path) = path else {
        return Ok(GuideConfig::default());
    };
    tracing::info!(config = %path.display(), "loading settings");
    Ok(ConfigLoader::new(Limits::default()).load(path)?)
}

/// Builds the category source selected by the CLI flags.
///
/// A flag (or its environment variable) wins over the settings file; with
/// neither `--data-dir` nor `--base-url` the bundled data is used.
///
/// # Errors
///
/// Returns a configuration error if `--base-url` is not an absolute URL.
pub fn open_source(
    args: &SourceArgs,
    settings: &GuideConfig,
) -> Result<Box<dyn CategorySource>, GuideError> {
    let limits = Limits::default();

    if let Some(dir) = &args.data_dir {
        return Ok(Box::new(DirSource::new(dir.clone(), limits)));
    }

    if let Some(base_url) = &args.base_url {
        let timeout = args.timeout.unwrap_or_else(|| settings.fetch_timeout());
        return Ok(Box::new(HttpSource::new(base_url, timeout, limits)?));
    }

    Ok(Box::new(BundledSource))
}

/// Opens the selected source and builds the question index.
///
/// # Errors
///
/// Returns an index error when no file is found or none loads.
pub async fn load_catalog(
    args: &SourceArgs,
    settings: &GuideConfig,
) -> Result<QuestionIndex, GuideError> {
    let source = open_source(args, settings)?;
    tracing::info!(source = %source.describe(), "loading question index");
    Ok(load_index(source.as_ref(), &settings.question_files()).await?)
}
