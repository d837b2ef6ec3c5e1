//! Shared integration-test harness for running the `interview-guide`
//! binary as a child process.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

/// Environment variables the binary reads; cleared so the caller's shell
/// cannot change test outcomes.
const GUIDE_ENV: &[&str] = &[
    "GUIDE_CONFIG",
    "GUIDE_DATA_DIR",
    "GUIDE_BASE_URL",
    "GUIDE_COLOR",
    "GUIDE_LOG_FORMAT",
    "GUIDE_LOG_LEVEL",
    "GUIDE_MAX_FILE_SIZE",
    "SITE_URL",
];

/// Runs the `interview-guide` binary.
pub struct GuideProcess;

impl GuideProcess {
    fn command(args: &[&str], env: &[(&str, &str)]) -> std::process::Command {
        let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_interview-guide"));
        for name in GUIDE_ENV {
            cmd.env_remove(name);
        }
        cmd.env("NO_COLOR", "1").args(args);
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd
    }

    /// Runs a command to completion and captures its output.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::spawn_command_with_env(args, &[])
    }

    /// Runs a command with extra environment variables.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
        Self::command(args, env)
            .output()
            .expect("failed to spawn interview-guide")
    }

    /// Async variant for tests that serve data from the same runtime.
    #[allow(clippy::missing_panics_doc)]
    pub async fn spawn_command_async(args: &[&str]) -> Output {
        tokio::process::Command::from(Self::command(args, &[]))
            .output()
            .await
            .expect("failed to spawn interview-guide")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Fixture path as a `&str`-friendly `String`.
    #[must_use]
    pub fn fixture(name: &str) -> String {
        Self::fixture_path(name).display().to_string()
    }
}

/// Lossy stdout.
#[must_use]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr.
#[must_use]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Asserts success, showing stderr otherwise.
#[allow(clippy::missing_panics_doc)]
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected exit 0, got {:?}: {}",
        output.status.code(),
        stderr(output)
    );
}

/// Copies the named fixture category files into `dir`.
#[allow(clippy::missing_panics_doc)]
pub fn copy_questions(dir: &Path, names: &[&str]) {
    for name in names {
        let from = GuideProcess::fixture_path("questions").join(name);
        std::fs::copy(&from, dir.join(name)).expect("failed to copy fixture");
    }
}
