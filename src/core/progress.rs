//! Per-chunk progress computation for downloads

use crate::core::units::format_size;
use crate::error::TubeError;

/// One progress observation, produced per received chunk.
///
/// The transfer layer constructs a fresh sample for every chunk it writes;
/// nothing is retained across callback invocations.
#[derive(Debug, Clone, Copy)]
pub struct ProgressSample {
    /// Total size of the stream in bytes
    pub total_bytes: u64,
    /// Bytes not yet transferred
    pub bytes_remaining: u64,
    /// Size of the most recently transferred chunk
    pub chunk_bytes: u64,
    /// Frame rate of the stream, when the variant exposes one
    pub fps: Option<u32>,
}

impl ProgressSample {
    /// Bytes transferred so far.
    pub fn downloaded(&self) -> u64 {
        self.total_bytes.saturating_sub(self.bytes_remaining)
    }

    /// Percentage complete, 0.0 to 100.0.
    ///
    /// A zero total is a caller bug and fails fast rather than dividing
    /// by zero.
    pub fn percent(&self) -> Result<f64, TubeError> {
        if self.total_bytes == 0 {
            return Err(TubeError::InvalidState(
                "progress sample with zero total bytes".to_string(),
            ));
        }
        Ok(self.downloaded() as f64 / self.total_bytes as f64 * 100.0)
    }

    /// Size of the last chunk in megabytes.
    pub fn chunk_mb(&self) -> f64 {
        self.chunk_bytes as f64 / (1024.0 * 1024.0)
    }

    /// Render the one-line status message printed per chunk.
    pub fn status_line(&self) -> Result<String, TubeError> {
        let percent = self.percent()?;
        let downloaded = format_size(self.downloaded() as f64);
        let total = format_size(self.total_bytes as f64);

        let line = match self.fps {
            Some(fps) => format!(
                "Downloading... {:.2}% complete. Downloaded: {} / {}. Chunk size: {:.2} MB, FPS: {}",
                percent,
                downloaded,
                total,
                self.chunk_mb(),
                fps
            ),
            None => format!(
                "Downloading... {:.2}% complete. Downloaded: {} / {}. Chunk size: {:.2} MB",
                percent,
                downloaded,
                total,
                self.chunk_mb()
            ),
        };
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_computation() {
        let sample = ProgressSample {
            total_bytes: 1000,
            bytes_remaining: 750,
            chunk_bytes: 250,
            fps: None,
        };
        assert_eq!(sample.downloaded(), 250);
        assert!((sample.percent().unwrap() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_total_is_invalid_state() {
        let sample = ProgressSample {
            total_bytes: 0,
            bytes_remaining: 0,
            chunk_bytes: 0,
            fps: None,
        };
        assert!(matches!(sample.percent(), Err(TubeError::InvalidState(_))));
        assert!(sample.status_line().is_err());
    }

    #[test]
    fn test_chunk_mb() {
        let sample = ProgressSample {
            total_bytes: 10 * 1024 * 1024,
            bytes_remaining: 0,
            chunk_bytes: 1024 * 1024,
            fps: None,
        };
        assert!((sample.chunk_mb() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_line_without_fps() {
        let sample = ProgressSample {
            total_bytes: 1000,
            bytes_remaining: 750,
            chunk_bytes: 250,
            fps: None,
        };
        let line = sample.status_line().unwrap();
        assert_eq!(
            line,
            "Downloading... 25.00% complete. Downloaded: 250.00 B / 1000.00 B. Chunk size: 0.00 MB"
        );
    }

    #[test]
    fn test_status_line_with_fps() {
        let sample = ProgressSample {
            total_bytes: 2048,
            bytes_remaining: 1024,
            chunk_bytes: 1024,
            fps: Some(60),
        };
        let line = sample.status_line().unwrap();
        assert!(line.contains("50.00% complete"));
        assert!(line.contains("1.00 KB / 2.00 KB"));
        assert!(line.ends_with("FPS: 60"));
    }

    #[test]
    fn test_complete_sample() {
        let sample = ProgressSample {
            total_bytes: 500,
            bytes_remaining: 0,
            chunk_bytes: 100,
            fps: None,
        };
        assert!((sample.percent().unwrap() - 100.0).abs() < f64::EPSILON);
    }
}
