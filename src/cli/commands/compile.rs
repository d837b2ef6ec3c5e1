//! `compile` command
//!
//! Writes the pre-bundled question data the web client ships with.

use crate::cli::args::CompileArgs;
use crate::cli::commands::load_catalog;
use crate::compile::CompiledBundle;
use crate::config::GuideConfig;
use crate::error::GuideError;

/// Load the index and write the compiled bundle.
///
/// # Errors
///
/// Returns an error if the index cannot be loaded or the output cannot
/// be written.
pub async fn run(args: &CompileArgs, settings: &GuideConfig) -> Result<(), GuideError> {
    let index = load_catalog(&args.source, settings).await?;
    let bundle = CompiledBundle::from_index(&index, chrono::Utc::now());
    let json = bundle.to_json()?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, json).await?;
            tracing::info!(
                output = %path.display(),
                categories = bundle.build_info.category_count,
                questions = bundle.build_info.question_count,
                "compiled question bundle"
            );
        }
        None => print!("{json}"),
    }

    Ok(())
}
