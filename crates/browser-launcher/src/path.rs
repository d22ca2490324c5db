//! Executable lookup on the search path

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolve `command` against the `PATH` environment variable
///
/// Returns the full path of the first executable match, or `None`.
pub fn find_in_path(command: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    find_in_dirs(command, &path_var)
}

/// Resolve `command` against an explicit `PATH`-style list of directories
pub fn find_in_dirs(command: &str, path_var: &OsStr) -> Option<PathBuf> {
    if command.contains(std::path::MAIN_SEPARATOR) {
        let path = Path::new(command);
        return is_executable(path).then(|| path.to_path_buf());
    }

    for dir in env::split_paths(path_var) {
        let candidate = dir.join(command);
        if is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(target_os = "windows") {
            let candidate = dir.join(format!("{command}.exe"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
