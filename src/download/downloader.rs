//! Streaming HTTP download with per-chunk progress callbacks

use crate::core::{MediaVariant, ProgressSample};
use crate::Result;
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Downloads a single media variant to a local file.
///
/// The transfer is a plain streaming GET; the progress callback fires
/// once per received chunk, in arrival order.
pub struct StreamDownloader {
    client: reqwest::Client,
}

impl StreamDownloader {
    /// Create a downloader with the given HTTP timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Download `variant` into `output_dir/filename`, reporting progress
    /// through `on_chunk`.
    ///
    /// The total size comes from the Content-Length header, falling back
    /// to the provider-reported byte size. When neither is known the
    /// transfer still runs but no progress samples are emitted, since a
    /// percentage cannot be computed without a total.
    pub async fn download<F>(
        &self,
        variant: &MediaVariant,
        output_dir: &Path,
        filename: &str,
        mut on_chunk: F,
    ) -> Result<PathBuf>
    where
        F: FnMut(ProgressSample) -> Result<()>,
    {
        fs::create_dir_all(output_dir).await?;
        let path = output_dir.join(filename);

        info!("Downloading format {} to {}", variant.format_id, path.display());

        let response = self
            .client
            .get(&variant.url)
            .send()
            .await?
            .error_for_status()?;

        let total_bytes = response
            .content_length()
            .filter(|len| *len > 0)
            .unwrap_or(variant.byte_size);
        debug!("Transfer size: {} bytes", total_bytes);

        let mut file = fs::File::create(&path).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;

            if total_bytes > 0 {
                on_chunk(ProgressSample {
                    total_bytes,
                    bytes_remaining: total_bytes.saturating_sub(written),
                    chunk_bytes: chunk.len() as u64,
                    fps: variant.fps,
                })?;
            }
        }
        file.flush().await?;

        info!("Wrote {} bytes to {}", written, path.display());
        Ok(path)
    }
}
