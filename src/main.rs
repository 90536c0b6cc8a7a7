//! Main entry point for tubefetch CLI

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tubefetch::cli::{prompt, Args, OutputFormatter};
use tubefetch::core::{select_streams, MediaVariant, VideoMetadata};
use tubefetch::download::StreamDownloader;
use tubefetch::error::TubeError;
use tubefetch::mux::Muxer;
use tubefetch::provider::{MediaProvider, YtDlp};
use tubefetch::utils::to_safe_filename;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = Args::parse();
    let mut formatter = OutputFormatter::new(args.verbosity_level());

    let url = match &args.url {
        Some(url) => url.clone(),
        None => prompt::read_url()?,
    };
    url::Url::parse(&url).map_err(|_| TubeError::InvalidUrl(url.clone()))?;

    let provider = YtDlp::new().with_binary(&args.ytdlp);
    let metadata = provider
        .fetch(&url)
        .await
        .context("fetching video metadata")?;
    info!(
        "Fetched metadata: '{}' with {} streams",
        metadata.title,
        metadata.variants.len()
    );

    formatter.print_metadata(&metadata);

    let menu = select_streams(&metadata.variants);
    if menu.is_empty() && metadata.best_audio().is_none() {
        return Err(TubeError::NoStreams.into());
    }

    formatter.print_menu(&menu);
    let choice = prompt::read_selection(menu.len() + 1)?;

    let downloader = StreamDownloader::new(args.timeout_duration())?;
    let muxer = Muxer::new().with_binary(&args.ffmpeg);
    let show_progress = !args.no_progress;

    // Last menu entry is the audio-only branch
    if choice == menu.len() + 1 {
        formatter.info(&format!(
            "Downloading only the audio of the video: {}",
            metadata.title
        ));
        download_audio(
            &downloader,
            &mut formatter,
            &metadata,
            &args.output,
            show_progress,
        )
        .await?;
        return Ok(());
    }

    let variant = &menu[choice - 1];
    let filename = to_safe_filename(&metadata.title, variant.extension());
    let video_path = download_with_progress(
        &downloader,
        &mut formatter,
        variant,
        &args.output,
        &filename,
        show_progress,
    )
    .await?;
    formatter.success(&format!("Video downloaded at: {}", video_path.display()));

    match download_audio(
        &downloader,
        &mut formatter,
        &metadata,
        &args.output,
        show_progress,
    )
    .await
    {
        Ok(audio_path) => {
            let combined = muxer.combine(&video_path, &audio_path).await?;
            formatter.success(&format!(
                "Video with audio downloaded at: {}",
                combined.display()
            ));
        }
        Err(TubeError::MissingAudioTrack) => {
            // The finished video download is kept
            formatter.warning("Could not find an available audio option.");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Download one variant, wiring the per-chunk progress reporting
async fn download_with_progress(
    downloader: &StreamDownloader,
    formatter: &mut OutputFormatter,
    variant: &MediaVariant,
    output_dir: &Path,
    filename: &str,
    show_progress: bool,
) -> Result<PathBuf, TubeError> {
    if show_progress {
        formatter.start_transfer(variant.byte_size, filename);
    }

    let result = {
        let reporter: &OutputFormatter = formatter;
        downloader
            .download(variant, output_dir, filename, |sample| {
                if show_progress {
                    reporter.report_progress(&sample)
                } else {
                    Ok(())
                }
            })
            .await
    };

    formatter.finish_transfer("done");
    result
}

/// Download the best available audio-only stream as `<title>.mp3`
async fn download_audio(
    downloader: &StreamDownloader,
    formatter: &mut OutputFormatter,
    metadata: &VideoMetadata,
    output_dir: &Path,
    show_progress: bool,
) -> Result<PathBuf, TubeError> {
    let audio = metadata
        .best_audio()
        .cloned()
        .ok_or(TubeError::MissingAudioTrack)?;

    let filename = to_safe_filename(&metadata.title, "mp3");
    let path = download_with_progress(
        downloader,
        formatter,
        &audio,
        output_dir,
        &filename,
        show_progress,
    )
    .await?;
    formatter.success(&format!("Audio downloaded at: {}", path.display()));
    Ok(path)
}

/// Initialize logging system
fn init_logging() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    Ok(())
}
