//! CLI argument definitions
//!
//! All Clap derive structs for `interview-guide` command-line parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::catalog::{LevelFilter, SkillLevel};
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Question catalog and site tooling for the AI interview guide.
#[derive(Parser, Debug)]
#[command(name = "interview-guide", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "GUIDE_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "GUIDE_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Path to a YAML settings file.
    #[arg(short, long, global = true, env = "GUIDE_CONFIG")]
    pub config: Option<PathBuf>,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List questions, optionally filtered by topic, level and text.
    Questions(QuestionsArgs),

    /// Show categories in display order with question counts.
    Categories(CategoriesArgs),

    /// Validate category files.
    Validate(ValidateArgs),

    /// Write the pre-bundled question data for the web client.
    Compile(CompileArgs),

    /// Resolve a deep link to the view it opens.
    Route(RouteArgs),

    /// Generate the XML sitemap.
    Sitemap(SitemapArgs),

    /// Generate campaign links with UTM parameters.
    Utm(UtmArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Data Source
// ============================================================================

/// Where category files are loaded from. Bundled data when neither is set.
#[derive(Args, Debug, Clone, Default)]
#[command(group = clap::ArgGroup::new("source").multiple(false))]
pub struct SourceArgs {
    /// Directory containing category files.
    #[arg(long, group = "source", env = "GUIDE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Base URL serving category files.
    #[arg(long, group = "source", env = "GUIDE_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout for URL sources (e.g. "10s", "500ms").
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,
}

// ============================================================================
// Data Commands
// ============================================================================

/// Arguments for `questions`.
#[derive(Args, Debug)]
pub struct QuestionsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Category slug to show.
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Skill level to show.
    #[arg(short, long, default_value = "all")]
    pub level: LevelArg,

    /// Case-insensitive text to search for.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `categories`.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Category files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `compile`.
#[derive(Args, Debug)]
pub struct CompileArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `route`.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Full URL or path with query, e.g. "/?category=rag".
    pub link: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Marketing Commands
// ============================================================================

/// Arguments for `sitemap`.
#[derive(Args, Debug)]
pub struct SitemapArgs {
    /// Public site URL.
    #[arg(long, env = "SITE_URL")]
    pub site_url: Option<String>,

    /// Output file.
    #[arg(short, long, default_value = "public/sitemap.xml")]
    pub output: PathBuf,
}

/// Arguments for `utm`.
#[derive(Args, Debug)]
pub struct UtmArgs {
    /// Input CSV of campaign rows.
    #[arg(short, long, default_value = "marketing/utm-links.csv")]
    pub input: PathBuf,

    /// Directory for `utm-links.json` and `utm-links.csv`.
    #[arg(short, long, default_value = "marketing/dist")]
    pub out_dir: PathBuf,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Skill level selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LevelArg {
    /// Every level.
    #[default]
    All,
    Novice,
    Intermediate,
    Expert,
    Master,
}

impl LevelArg {
    /// The selected tier, or `None` for every level.
    #[must_use]
    pub const fn skill_level(self) -> Option<SkillLevel> {
        match self {
            Self::All => None,
            Self::Novice => Some(SkillLevel::Novice),
            Self::Intermediate => Some(SkillLevel::Intermediate),
            Self::Expert => Some(SkillLevel::Expert),
            Self::Master => Some(SkillLevel::Master),
        }
    }

    /// Converts to the catalog's level filter.
    #[must_use]
    pub fn to_filter(self) -> LevelFilter {
        self.skill_level().map_or(LevelFilter::All, |level| {
            LevelFilter::Level(level.as_str().to_string())
        })
    }
}

/// Parses a human duration for `--timeout`, refusing zero.
///
/// # Errors
///
/// Returns a message if `raw` is not a duration or is zero.
pub fn parse_timeout(raw: &str) -> Result<Duration, String> {
    let timeout = humantime::parse_duration(raw).map_err(|e| e.to_string())?;
    if timeout.is_zero() {
        return Err("timeout must be greater than zero".to_string());
    }
    Ok(timeout)
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
