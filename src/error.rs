//! Error types for tubefetch

use thiserror::Error;

/// Main error type for tubefetch operations
#[derive(Debug, Error)]
pub enum TubeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("No downloadable streams found")]
    NoStreams,

    #[error("No audio track with a codec available")]
    MissingAudioTrack,

    #[error("Media info provider failed: {0}")]
    ProviderFailed(String),

    #[error("Mux failed: ffmpeg exited with status {0}")]
    MuxFailed(std::process::ExitStatus),

    #[error("Download failed: {0}")]
    DownloadFailed(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
}

impl TubeError {
    /// Check if the error leaves a usable partial result on disk.
    ///
    /// A missing audio track or a failed mux still leaves the completed
    /// video download in place.
    pub fn keeps_video(&self) -> bool {
        matches!(self, TubeError::MissingAudioTrack | TubeError::MuxFailed(_))
    }
}
