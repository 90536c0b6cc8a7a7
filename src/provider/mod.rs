//! Media-info provider boundary

pub mod ytdlp;

pub use ytdlp::YtDlp;

use crate::core::VideoMetadata;
use crate::Result;
use async_trait::async_trait;

/// Source of video metadata and stream listings.
///
/// The actual platform extraction lives behind this seam; the rest of
/// the program only ever sees [`VideoMetadata`].
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Fetch metadata and the stream list for a video URL.
    async fn fetch(&self, url: &str) -> Result<VideoMetadata>;
}
