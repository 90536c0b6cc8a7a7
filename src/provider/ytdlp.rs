//! yt-dlp backed media-info provider
//!
//! Runs `yt-dlp -J <url>` and maps its JSON dump into [`VideoMetadata`].
//! No platform protocol knowledge lives here; yt-dlp owns extraction.

use crate::core::{MediaVariant, VideoMetadata};
use crate::error::TubeError;
use crate::provider::MediaProvider;
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info};

/// Media-info provider shelling out to the `yt-dlp` binary
#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: String,
}

impl YtDlp {
    /// Create a provider using `yt-dlp` from PATH
    pub fn new() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
        }
    }

    /// Use a specific yt-dlp binary
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaProvider for YtDlp {
    async fn fetch(&self, url: &str) -> Result<VideoMetadata> {
        info!("Fetching metadata via {} for {}", self.binary, url);

        let output = Command::new(&self.binary)
            .arg("-J")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TubeError::ProviderFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let raw: RawInfo = serde_json::from_slice(&output.stdout)?;
        let metadata = map_info(raw, url);
        debug!(
            "Provider returned {} variants for '{}'",
            metadata.variants.len(),
            metadata.title
        );
        Ok(metadata)
    }
}

#[derive(Debug, Deserialize)]
struct RawInfo {
    title: String,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    upload_date: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    view_count: Option<u64>,
    #[serde(default)]
    channel_url: Option<String>,
    #[serde(default)]
    webpage_url: Option<String>,
    #[serde(default)]
    formats: Vec<RawFormat>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    format_id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    format_note: Option<String>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    fps: Option<f64>,
    #[serde(default)]
    filesize: Option<u64>,
    #[serde(default)]
    filesize_approx: Option<f64>,
    #[serde(default)]
    vcodec: Option<String>,
    #[serde(default)]
    acodec: Option<String>,
}

/// yt-dlp reports absent codecs as the literal string "none"
fn codec(value: Option<String>) -> Option<String> {
    value.filter(|c| c != "none" && !c.is_empty())
}

fn map_info(raw: RawInfo, requested_url: &str) -> VideoMetadata {
    let variants = raw.formats.into_iter().filter_map(map_format).collect();

    VideoMetadata {
        title: raw.title,
        author: raw.uploader.or(raw.channel).unwrap_or_default(),
        publish_date: raw.upload_date,
        duration_secs: raw.duration.map(|d| d as u64).unwrap_or(0),
        view_count: raw.view_count,
        channel_url: raw.channel_url,
        watch_url: raw.webpage_url.unwrap_or_else(|| requested_url.to_string()),
        variants,
    }
}

fn map_format(raw: RawFormat) -> Option<MediaVariant> {
    let url = raw.url.filter(|u| !u.is_empty())?;

    let video_codec = codec(raw.vcodec);
    let audio_codec = codec(raw.acodec);
    // Storyboards and other non-media entries carry neither codec
    if video_codec.is_none() && audio_codec.is_none() {
        return None;
    }

    let is_audio_only = video_codec.is_none();
    let resolution = if is_audio_only {
        None
    } else {
        resolution_label(raw.format_note.as_deref(), raw.height)
    };

    let ext = raw.ext.unwrap_or_default();
    let mime_type = mime_for(is_audio_only, &ext);

    Some(MediaVariant {
        format_id: raw.format_id,
        url,
        resolution,
        fps: raw.fps.filter(|f| *f > 0.0).map(|f| f.round() as u32),
        mime_type,
        byte_size: raw
            .filesize
            .or_else(|| raw.filesize_approx.map(|f| f as u64))
            .unwrap_or(0),
        is_audio_only,
        audio_codec,
    })
}

/// Resolution label: a clean "NNNp" format note wins, else derived
/// from the reported height.
fn resolution_label(note: Option<&str>, height: Option<u32>) -> Option<String> {
    if let Some(note) = note {
        if let Some(digits) = note.strip_suffix('p') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return Some(note.to_string());
            }
        }
    }
    height.map(|h| format!("{}p", h))
}

fn mime_for(is_audio_only: bool, ext: &str) -> String {
    let (kind, subtype) = if is_audio_only {
        let subtype = match ext {
            "m4a" | "mp4" => "mp4",
            "webm" | "weba" | "opus" => "webm",
            "mp3" => "mpeg",
            other => other,
        };
        ("audio", subtype)
    } else {
        let subtype = match ext {
            "mp4" | "m4v" => "mp4",
            "webm" => "webm",
            "3gp" => "3gpp",
            other => other,
        };
        ("video", subtype)
    };
    format!("{}/{}", kind, subtype)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": "Test Video",
        "uploader": "Test Channel",
        "upload_date": "20240115",
        "duration": 3661.0,
        "view_count": 1050000,
        "channel_url": "https://example.com/channel",
        "webpage_url": "https://example.com/watch?v=abc",
        "formats": [
            {
                "format_id": "sb0",
                "url": "https://example.com/storyboard",
                "ext": "mhtml",
                "vcodec": "none",
                "acodec": "none"
            },
            {
                "format_id": "140",
                "url": "https://example.com/audio",
                "ext": "m4a",
                "vcodec": "none",
                "acodec": "mp4a.40.2",
                "filesize": 1000000
            },
            {
                "format_id": "137",
                "url": "https://example.com/1080",
                "ext": "mp4",
                "format_note": "1080p",
                "height": 1080,
                "fps": 29.97,
                "vcodec": "avc1.640028",
                "acodec": "none",
                "filesize": 50000000
            },
            {
                "format_id": "248",
                "url": "https://example.com/webm",
                "ext": "webm",
                "format_note": "1080p, THROTTLED",
                "height": 1080,
                "fps": 30,
                "vcodec": "vp9",
                "acodec": "none",
                "filesize_approx": 45000000.5
            }
        ]
    }"#;

    fn parse_sample() -> VideoMetadata {
        let raw: RawInfo = serde_json::from_str(SAMPLE).unwrap();
        map_info(raw, "https://example.com/requested")
    }

    #[test]
    fn test_metadata_fields() {
        let meta = parse_sample();
        assert_eq!(meta.title, "Test Video");
        assert_eq!(meta.author, "Test Channel");
        assert_eq!(meta.publish_date.as_deref(), Some("20240115"));
        assert_eq!(meta.duration_secs, 3661);
        assert_eq!(meta.view_count, Some(1_050_000));
        assert_eq!(meta.watch_url, "https://example.com/watch?v=abc");
    }

    #[test]
    fn test_storyboards_dropped() {
        let meta = parse_sample();
        assert_eq!(meta.variants.len(), 3);
        assert!(meta.variants.iter().all(|v| v.format_id != "sb0"));
    }

    #[test]
    fn test_audio_variant_mapping() {
        let meta = parse_sample();
        let audio = meta.variants.iter().find(|v| v.format_id == "140").unwrap();
        assert!(audio.is_audio_only);
        assert!(audio.resolution.is_none());
        assert_eq!(audio.audio_codec.as_deref(), Some("mp4a.40.2"));
        assert_eq!(audio.mime_type, "audio/mp4");
        assert_eq!(audio.byte_size, 1_000_000);
    }

    #[test]
    fn test_video_variant_mapping() {
        let meta = parse_sample();
        let video = meta.variants.iter().find(|v| v.format_id == "137").unwrap();
        assert!(!video.is_audio_only);
        assert_eq!(video.resolution.as_deref(), Some("1080p"));
        assert_eq!(video.fps, Some(30));
        assert_eq!(video.mime_type, "video/mp4");
        assert!(video.audio_codec.is_none());
    }

    #[test]
    fn test_noisy_format_note_falls_back_to_height() {
        let meta = parse_sample();
        let webm = meta.variants.iter().find(|v| v.format_id == "248").unwrap();
        assert_eq!(webm.resolution.as_deref(), Some("1080p"));
        assert_eq!(webm.byte_size, 45_000_000);
        assert_eq!(webm.mime_type, "video/webm");
    }

    #[test]
    fn test_resolution_label() {
        assert_eq!(resolution_label(Some("720p"), Some(720)).as_deref(), Some("720p"));
        assert_eq!(resolution_label(Some("medium"), Some(480)).as_deref(), Some("480p"));
        assert_eq!(resolution_label(None, Some(1080)).as_deref(), Some("1080p"));
        assert_eq!(resolution_label(None, None), None);
        assert_eq!(resolution_label(Some("p"), None), None);
    }

    #[test]
    fn test_codec_filter() {
        assert_eq!(codec(Some("none".into())), None);
        assert_eq!(codec(Some("".into())), None);
        assert_eq!(codec(Some("opus".into())).as_deref(), Some("opus"));
        assert_eq!(codec(None), None);
    }

    #[test]
    fn test_watch_url_falls_back_to_request() {
        let raw: RawInfo =
            serde_json::from_str(r#"{"title": "t", "formats": []}"#).unwrap();
        let meta = map_info(raw, "https://example.com/requested");
        assert_eq!(meta.watch_url, "https://example.com/requested");
    }
}
