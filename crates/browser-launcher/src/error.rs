use thiserror::Error;

/// Why a URL could not be opened
#[derive(Debug, Error)]
pub enum LaunchError {
    /// None of the candidate browsers is installed (Unix only)
    #[error("no suitable browser found")]
    NoBrowserFound,

    /// The browser process could not be created
    #[error("failed to start {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
