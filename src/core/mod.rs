//! Core types and stream selection logic

pub mod metadata;
pub mod progress;
pub mod selector;
pub mod units;

pub use metadata::{MediaVariant, VideoMetadata};
pub use progress::ProgressSample;
pub use selector::select_streams;
pub use units::{format_duration, format_size, format_views};
