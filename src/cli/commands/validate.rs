//! `validate` command
//!
//! Checks category files without building an index. Every file is
//! reported; the command fails if any file is rejected.

use std::collections::HashMap;
use std::path::Path;

use crate::catalog::source::read_limited;
use crate::catalog::{ValidationResult, Validator, parse_category, slugify};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::Limits;
use crate::error::{GuideError, LoadError, Severity, ValidationIssue};

/// Outcome for one file.
#[derive(Debug)]
struct FileReport {
    file: String,
    slug: Option<String>,
    questions: usize,
    result: Result<ValidationResult, LoadError>,
}

impl FileReport {
    fn passed(&self) -> bool {
        self.result.as_ref().is_ok_and(ValidationResult::is_valid)
    }

    fn to_json(&self) -> serde_json::Value {
        let issues = |list: &[ValidationIssue]| -> Vec<String> {
            list.iter().map(ToString::to_string).collect()
        };
        match &self.result {
            Ok(result) => serde_json::json!({
                "file": self.file,
                "valid": result.is_valid(),
                "slug": self.slug,
                "questions": self.questions,
                "errors": issues(&result.errors),
                "warnings": issues(&result.warnings),
            }),
            Err(e) => serde_json::json!({
                "file": self.file,
                "valid": false,
                "errors": [e.to_string()],
                "warnings": [],
            }),
        }
    }
}

/// Validate category files and report the findings.
///
/// # Errors
///
/// Returns a usage error if an argument is a directory and
/// `GuideError::ValidationFailed` if any file is rejected.
pub async fn run(args: &ValidateArgs) -> Result<(), GuideError> {
    let limits = Limits::default();
    let mut validator = Validator::new();
    let mut slugs: HashMap<String, String> = HashMap::new();
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        if path.is_dir() {
            return Err(GuideError::Usage(format!(
                "{} is a directory; pass category files",
                path.display()
            )));
        }
        tracing::info!(file = %path.display(), "validating category file");
        reports.push(check_file(path, &limits, &mut validator, &mut slugs, args.strict).await);
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();

    match args.format {
        OutputFormat::Json => {
            let body: Vec<_> = reports.iter().map(FileReport::to_json).collect();
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Human => print_human(&reports),
    }

    if failed > 0 {
        return Err(GuideError::ValidationFailed {
            failed,
            total: reports.len(),
        });
    }
    Ok(())
}

async fn check_file(
    path: &Path,
    limits: &Limits,
    validator: &mut Validator,
    slugs: &mut HashMap<String, String>,
    strict: bool,
) -> FileReport {
    let file = path.display().to_string();
    let mut report = FileReport {
        file: file.clone(),
        slug: None,
        questions: 0,
        result: Err(LoadError::NotFound { file: file.clone() }),
    };

    let data = match read_limited(path, &file, limits)
        .await
        .and_then(|raw| parse_category(&file, &raw))
    {
        Ok(data) => data,
        Err(e) => {
            report.result = Err(e);
            return report;
        }
    };

    let mut result = validator.validate(&data);
    let slug = slugify(&data.category);

    if let Some(existing) = slugs.get(&slug) {
        result.errors.push(ValidationIssue {
            path: "category".to_string(),
            message: format!("slug '{slug}' is already used by {existing}"),
            severity: Severity::Error,
        });
    } else {
        slugs.insert(slug.clone(), file);
    }

    if strict {
        result = result.into_strict();
    }

    report.slug = Some(slug);
    report.questions = data.question_count();
    report.result = Ok(result);
    report
}

fn print_human(reports: &[FileReport]) {
    for report in reports {
        match &report.result {
            Ok(result) => {
                let mark = if result.is_valid() { "ok" } else { "FAILED" };
                println!(
                    "{mark:<8}{} ({}, {} questions)",
                    report.file,
                    report.slug.as_deref().unwrap_or("-"),
                    report.questions
                );
                for issue in result.errors.iter().chain(&result.warnings) {
                    println!("          {issue}");
                }
            }
            Err(e) => println!("{:<8}{e}", "FAILED"),
        }
    }

    let passed = reports.iter().filter(|r| r.passed()).count();
    println!("\n{passed} of {} files valid", reports.len());
}
