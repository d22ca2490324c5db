use std::path::PathBuf;

const CONFIG_FILE: &str = ".go-resources.toml";

/// Load config file content from CWD first, then home directory
///
/// Returns the file content if found, None otherwise. A missing file is not
/// an error: the application runs fine on defaults.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        return Some(content);
    }

    if let Some(home_config) = home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            return Some(content);
        }
    }

    None
}

/// ~/.go-resources.toml, if the home directory is known
fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}
