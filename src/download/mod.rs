//! HTTP stream transfer

pub mod downloader;

pub use downloader::StreamDownloader;
