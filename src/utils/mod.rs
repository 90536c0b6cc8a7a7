//! Utility functions

pub mod filename;
pub mod mime;

pub use filename::to_safe_filename;
pub use mime::ext_from_mime;
