//! `utm` command

use crate::cli::args::UtmArgs;
use crate::error::GuideError;
use crate::marketing::{generate_links, parse_csv, write_outputs};

/// Read campaign rows and write the generated links.
///
/// # Errors
///
/// Returns an I/O error if the input cannot be read or the outputs cannot
/// be written, and a marketing error for a row with an invalid URL.
pub fn run(args: &UtmArgs) -> Result<(), GuideError> {
    let csv = std::fs::read_to_string(&args.input).map_err(|e| {
        std::io::Error::new(e.kind(), format!("{}: {e}", args.input.display()))
    })?;
    let rows = parse_csv(&csv);
    tracing::info!(input = %args.input.display(), rows = rows.len(), "read campaign rows");

    let links = generate_links(rows)?;
    let (json_path, csv_path) = write_outputs(&links, &args.out_dir)?;

    println!(
        "Generated {} and {} ({} links)",
        csv_path.display(),
        json_path.display(),
        links.len()
    );
    Ok(())
}
