//! Video metadata and media variant structures

use serde::{Deserialize, Serialize};

/// Video information and metadata supplied by the media-info provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Video title
    pub title: String,
    /// Video author/channel name
    pub author: String,
    /// Publish date, as reported by the provider (YYYYMMDD)
    pub publish_date: Option<String>,
    /// Video duration in seconds
    pub duration_secs: u64,
    /// Video view count
    pub view_count: Option<u64>,
    /// Channel URL
    pub channel_url: Option<String>,
    /// Canonical watch URL
    pub watch_url: String,
    /// Available media variants
    pub variants: Vec<MediaVariant>,
}

impl VideoMetadata {
    /// Audio-only variants that actually carry an audio codec.
    pub fn audio_variants(&self) -> Vec<&MediaVariant> {
        self.variants
            .iter()
            .filter(|v| v.is_audio_only && v.audio_codec.is_some())
            .collect()
    }

    /// The first usable audio-only variant, if any.
    ///
    /// The provider lists audio streams best-first, so the first entry is
    /// the highest quality one.
    pub fn best_audio(&self) -> Option<&MediaVariant> {
        self.audio_variants().into_iter().next()
    }
}

/// One downloadable media stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaVariant {
    /// Provider-side format identifier
    pub format_id: String,
    /// Direct download URL
    pub url: String,
    /// Resolution label (e.g. "1080p"); absent for audio-only streams
    pub resolution: Option<String>,
    /// Frame rate
    pub fps: Option<u32>,
    /// MIME type (e.g. "video/mp4")
    pub mime_type: String,
    /// File size in bytes (0 when the provider does not report one)
    pub byte_size: u64,
    /// Whether this stream carries no video track
    pub is_audio_only: bool,
    /// Audio codec, when the stream carries audio
    pub audio_codec: Option<String>,
}

impl MediaVariant {
    /// Get file extension from the MIME type
    pub fn extension(&self) -> &'static str {
        crate::utils::mime::ext_from_mime(&self.mime_type)
    }

    /// Get human-readable size string
    pub fn size_string(&self) -> String {
        crate::core::units::format_size(self.byte_size as f64)
    }
}
