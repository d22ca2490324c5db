//! Browser launching
//!
//! Opens URLs in the system's default or best-available browser.
//!
//! Launching is split in two steps:
//! - [`resolve_command`] picks the program and arguments for a [`Platform`]
//! - [`spawn_detached`] starts that program without waiting for it
//!
//! Platform-specific commands:
//! - macOS: `open <url>`
//! - Windows: `cmd /C start "" <url>`
//! - Other Unix: the first of [`UNIX_BROWSERS`] found on `PATH`

pub mod error;
pub mod path;
pub mod platform;

pub use error::LaunchError;
pub use path::find_in_path;
pub use platform::Platform;

use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Browsers tried on Unix-like systems, in order of preference
pub const UNIX_BROWSERS: [&str; 4] = ["google-chrome", "chromium-browser", "firefox", "xdg-open"];

/// A resolved program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl LaunchCommand {
    fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Opens URLs somewhere outside the application
pub trait Launcher {
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launcher backed by the real operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        let platform = Platform::current();
        let command = resolve_command(platform, url, find_in_path)?;
        log::debug!(
            "Opening {} on {:?} with {}",
            url,
            platform,
            command.program.display()
        );
        spawn_detached(&command)
    }
}

/// Pick the command that opens `url` on `platform`
///
/// `lookup` resolves a bare executable name to a full path, returning `None`
/// when it is not installed. It is only consulted on [`Platform::Unix`].
pub fn resolve_command<F>(
    platform: Platform,
    url: &str,
    lookup: F,
) -> Result<LaunchCommand, LaunchError>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    match platform {
        Platform::Windows => Ok(LaunchCommand::new(
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )),
        Platform::MacOs => Ok(LaunchCommand::new("open", vec![url.to_string()])),
        Platform::Unix => UNIX_BROWSERS
            .iter()
            .find_map(|browser| lookup(*browser))
            .map(|program| LaunchCommand::new(program, vec![url.to_string()]))
            .ok_or(LaunchError::NoBrowserFound),
    }
}

/// Start `command` without waiting for it or capturing its output
///
/// The child's stdio is detached so the browser cannot write over the
/// terminal UI. The child is never reaped.
pub fn spawn_detached(command: &LaunchCommand) -> Result<(), LaunchError> {
    Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_child| ())
        .map_err(|source| LaunchError::SpawnFailed {
            program: command.program.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(installed: &'static [&'static str]) -> impl Fn(&str) -> Option<PathBuf> {
        move |name| {
            installed
                .iter()
                .any(|candidate| *candidate == name)
                .then(|| PathBuf::from("/usr/bin").join(name))
        }
    }

    #[test]
    fn test_windows_uses_shell_start() {
        let cmd = resolve_command(Platform::Windows, "https://go.dev", only(&[])).unwrap();
        assert_eq!(cmd.program, PathBuf::from("cmd"));
        assert_eq!(cmd.args, vec!["/C", "start", "", "https://go.dev"]);
    }

    #[test]
    fn test_macos_uses_open() {
        let cmd = resolve_command(Platform::MacOs, "https://go.dev", only(&[])).unwrap();
        assert_eq!(cmd.program, PathBuf::from("open"));
        assert_eq!(cmd.args, vec!["https://go.dev"]);
    }

    #[test]
    fn test_unix_prefers_first_available_browser() {
        let cmd = resolve_command(
            Platform::Unix,
            "https://go.dev",
            only(&["xdg-open", "firefox", "chromium-browser"]),
        )
        .unwrap();
        assert_eq!(cmd.program, PathBuf::from("/usr/bin/chromium-browser"));
        assert_eq!(cmd.args, vec!["https://go.dev"]);
    }

    #[test]
    fn test_unix_falls_back_to_xdg_open() {
        let cmd = resolve_command(Platform::Unix, "https://go.dev", only(&["xdg-open"])).unwrap();
        assert_eq!(cmd.program, PathBuf::from("/usr/bin/xdg-open"));
    }

    #[test]
    fn test_unix_without_browser_fails() {
        let err = resolve_command(Platform::Unix, "https://go.dev", only(&[])).unwrap_err();
        assert!(matches!(err, LaunchError::NoBrowserFound));
        assert_eq!(err.to_string(), "no suitable browser found");
    }

    #[test]
    fn test_spawn_missing_program_reports_spawn_failure() {
        let cmd = LaunchCommand::new("/nonexistent/definitely-not-a-browser", vec![]);
        let err = spawn_detached(&cmd).unwrap_err();
        assert!(matches!(err, LaunchError::SpawnFailed { .. }));
        assert!(err
            .to_string()
            .starts_with("failed to start /nonexistent/definitely-not-a-browser"));
    }
}
