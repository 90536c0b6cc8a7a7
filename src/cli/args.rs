//! Command line argument parsing

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Interactive video downloader - pick a quality, download, mux with ffmpeg
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Video URL (prompted for interactively when omitted)
    pub url: Option<String>,

    /// Output directory for downloaded files
    #[arg(short, long, value_name = "DIR", default_value = "YouTube")]
    pub output: PathBuf,

    /// HTTP timeout (e.g. 30s, 1m)
    #[arg(long, value_name = "DURATION", default_value = "30s")]
    pub timeout: humantime::Duration,

    /// Path to the yt-dlp binary
    #[arg(long, value_name = "PATH", default_value = "yt-dlp")]
    pub ytdlp: String,

    /// Path to the ffmpeg binary
    #[arg(long, value_name = "PATH", default_value = "ffmpeg")]
    pub ffmpeg: String,

    /// Disable per-chunk progress output
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (only errors)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Get HTTP timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        self.timeout.into()
    }

    /// Get output verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Quiet (only errors)
    Quiet,
    /// Normal
    Normal,
    /// Verbose (debug info)
    Verbose,
}


// Implement Default for Args to make tests work
impl Default for Args {
    fn default() -> Self {
        Self {
            url: None,
            output: PathBuf::from("YouTube"),
            timeout: humantime::Duration::from(Duration::from_secs(30)),
            ytdlp: "yt-dlp".to_string(),
            ffmpeg: "ffmpeg".to_string(),
            no_progress: false,
            verbose: false,
            quiet: false,
        }
    }
}
