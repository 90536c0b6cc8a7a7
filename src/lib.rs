//! # tubefetch - Interactive Video Downloader
//!
//! Fetches video metadata and stream listings through an external
//! media-info provider, presents a quality menu, downloads the chosen
//! stream(s) and muxes video + audio with ffmpeg.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tubefetch::provider::{MediaProvider, YtDlp};
//! use tubefetch::core::select_streams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = YtDlp::new();
//!     let metadata = provider.fetch("VIDEO_URL").await?;
//!     let menu = select_streams(&metadata.variants);
//!     println!("{} quality options", menu.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod download;
pub mod error;
pub mod mux;
pub mod provider;
pub mod utils;

// Re-export main types
pub use crate::core::{select_streams, MediaVariant, ProgressSample, VideoMetadata};
pub use error::TubeError;

/// Result type alias for tubefetch operations
pub type Result<T> = std::result::Result<T, TubeError>;
