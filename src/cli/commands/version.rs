//! Version information display

use crate::catalog::bundled::BUNDLED_FILES;
use crate::cli::args::{OutputFormat, VersionArgs};

/// Print version information and the number of bundled category files.
pub fn run(args: &VersionArgs) {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let bundled = BUNDLED_FILES.len();

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version} ({bundled} bundled category files)");
        }
        OutputFormat::Json => {
            println!(r#"{{"name":"{name}","version":"{version}","bundledFiles":{bundled}}}"#);
        }
    }
}
