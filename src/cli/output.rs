//! Output formatting and progress display

use crate::cli::args::VerbosityLevel;
use crate::core::units::{format_duration, format_size, format_views};
use crate::core::{MediaVariant, ProgressSample, VideoMetadata};
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Output formatter for tubefetch
pub struct OutputFormatter {
    verbosity: VerbosityLevel,
    progress_bar: Option<ProgressBar>,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            progress_bar: None,
        }
    }

    /// Print video metadata and links
    pub fn print_metadata(&self, metadata: &VideoMetadata) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!();
        println!("Channel: {}", metadata.author);
        println!("Video Title: {}", metadata.title);
        println!("Duration: {}", format_duration(metadata.duration_secs));
        if let Some(views) = metadata.view_count {
            println!("Views: {}", format_views(views));
        }
        if let Some(date) = &metadata.publish_date {
            println!("Published: {}", date);
        }
        if let Some(channel) = &metadata.channel_url {
            println!();
            println!("Channel Link: {}", channel);
        }
        println!();
        println!("Video Link: {}", metadata.watch_url);
        println!();
    }

    /// Print the numbered quality menu; the last entry is audio only
    pub fn print_menu(&self, menu: &[MediaVariant]) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!("Available Resolutions:");
        for (i, variant) in menu.iter().enumerate() {
            let resolution = variant.resolution.as_deref().unwrap_or("?");
            match variant.fps {
                Some(fps) => println!(
                    "{}. Resolution: {}, FPS: {}, Format: {}, Size: {}",
                    i + 1,
                    resolution,
                    fps,
                    variant.mime_type,
                    variant.size_string()
                ),
                None => println!(
                    "{}. Resolution: {}, Format: {}, Size: {}",
                    i + 1,
                    resolution,
                    variant.mime_type,
                    variant.size_string()
                ),
            }
        }
        println!("{}. Download audio only", menu.len() + 1);
    }

    /// Start a progress bar for a transfer of the given size
    pub fn start_transfer(&mut self, total_bytes: u64, label: &str) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_bytes);
        bar.set_style(style);
        bar.set_message(label.to_string());
        self.progress_bar = Some(bar);
    }

    /// Emit one progress status line and advance the bar
    pub fn report_progress(&self, sample: &ProgressSample) -> Result<()> {
        if self.verbosity == VerbosityLevel::Quiet {
            return Ok(());
        }

        let line = sample.status_line()?;
        match &self.progress_bar {
            Some(bar) => {
                bar.set_length(sample.total_bytes);
                bar.set_position(sample.downloaded());
                bar.println(line);
            }
            None => println!("{}", line),
        }
        Ok(())
    }

    /// Finish the current progress bar
    pub fn finish_transfer(&mut self, message: &str) {
        if let Some(bar) = self.progress_bar.take() {
            bar.finish_with_message(message.to_string());
        }
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            println!("{}", message);
        }
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            println!("{}", message.green());
        }
    }

    /// Print warning message
    pub fn warning(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            eprintln!("{}", message.yellow());
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}
