//! Combining separately downloaded video and audio with ffmpeg

use crate::error::TubeError;
use crate::Result;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::info;

/// Shells out to ffmpeg to merge a video-only and an audio-only file.
///
/// ffmpeg is a black box here: stdout/stderr pass straight through and
/// only the exit status is inspected.
pub struct Muxer {
    binary: String,
}

impl Muxer {
    /// Create a muxer using `ffmpeg` from PATH
    pub fn new() -> Self {
        Self {
            binary: "ffmpeg".to_string(),
        }
    }

    /// Use a specific ffmpeg binary
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Merge `video` and `audio` into an mp4 next to the video file.
    ///
    /// The video track is copied as-is; audio is re-encoded to AAC.
    pub async fn combine(&self, video: &Path, audio: &Path) -> Result<PathBuf> {
        let output = combined_path(video);
        info!(
            "Muxing {} + {} -> {}",
            video.display(),
            audio.display(),
            output.display()
        );

        let status = Command::new(&self.binary)
            .arg("-y")
            .arg("-i")
            .arg(video)
            .arg("-i")
            .arg(audio)
            .args(["-c:v", "copy", "-c:a", "aac", "-strict", "experimental"])
            .arg(&output)
            .status()
            .await?;

        if !status.success() {
            return Err(TubeError::MuxFailed(status));
        }
        Ok(output)
    }
}

impl Default for Muxer {
    fn default() -> Self {
        Self::new()
    }
}

/// Output path: same basename as the video, mp4 extension. When the
/// video itself is already an mp4 the stem gets a suffix so ffmpeg does
/// not read and write the same file.
fn combined_path(video: &Path) -> PathBuf {
    let output = video.with_extension("mp4");
    if output == video {
        let stem = video
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());
        video.with_file_name(format!("{} (combined).mp4", stem))
    } else {
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_path_replaces_extension() {
        assert_eq!(
            combined_path(Path::new("/out/My Clip.webm")),
            PathBuf::from("/out/My Clip.mp4")
        );
    }

    #[test]
    fn test_combined_path_avoids_overwriting_input() {
        assert_eq!(
            combined_path(Path::new("/out/My Clip.mp4")),
            PathBuf::from("/out/My Clip (combined).mp4")
        );
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_mux_failed() {
        let muxer = Muxer::new().with_binary("false");
        let result = muxer
            .combine(Path::new("/tmp/v.webm"), Path::new("/tmp/a.m4a"))
            .await;
        assert!(matches!(result, Err(TubeError::MuxFailed(_))));
    }

    #[tokio::test]
    async fn test_zero_exit_returns_output_path() {
        let muxer = Muxer::new().with_binary("true");
        let path = muxer
            .combine(Path::new("/tmp/v.webm"), Path::new("/tmp/a.m4a"))
            .await
            .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/v.mp4"));
    }
}
