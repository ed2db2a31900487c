//! prep-preview - render the preprocessing steps for one audio file

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use audio_prep::{
    open, pad_trim, rechannel, resample, show_spectro, show_transform, show_wave, signal_shift,
    spectro_augment, spectro_gram, PrepConfig,
};

/// Load an audio file, run pad/trim, shift, spectrogram and masking on it,
/// and write a PNG for each stage
#[derive(Parser, Debug)]
#[command(name = "prep-preview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Audio file to preview
    input: PathBuf,

    /// JSON preprocessing config (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the rendered figures
    #[arg(short, long, default_value = "preview")]
    out_dir: PathBuf,

    /// Seed for the padding, shift and mask draws
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize env_logger to output to stderr (reads RUST_LOG env var)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PrepConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PrepConfig::default(),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    let mut aud = open(&cli.input).context("Failed to load audio")?;
    if let Some(rate) = config.clip.target_sample_rate {
        aud = resample(&aud, rate).context("Failed to resample")?;
    }
    if let Some(channels) = config.clip.target_channels {
        aud = rechannel(&aud, channels).context("Failed to rechannel")?;
    }

    let clipped = pad_trim(&aud, config.clip.max_ms, &mut rng).context("Failed to pad/trim")?;
    show_wave(&clipped, "pad/trim").save_png(cli.out_dir.join("wave.png"))?;

    let shifted = signal_shift(&clipped, config.clip.max_shift_pct, &mut rng)
        .context("Failed to shift signal")?;
    show_transform(Some(&clipped), Some(&shifted), "time shift")
        .save_png(cli.out_dir.join("transform.png"))?;

    let kind = config.spectrogram.kind;
    let Some(mut spec) = spectro_gram(&shifted, kind, &config.spectrogram.params())
        .context("Failed to compute spectrogram")?
    else {
        warn!("No spectrogram for kind '{}'; skipping spectrogram figures", kind);
        return Ok(());
    };
    show_spectro(&spec, &kind.to_string()).save_png(cli.out_dir.join("spectro.png"))?;

    let bands = spectro_augment(&mut spec, &config.augment, &mut rng)
        .context("Failed to augment spectrogram")?;
    show_spectro(&spec, "augmented").save_png(cli.out_dir.join("augmented.png"))?;

    info!(
        "Wrote previews for {} to {} ({} mask bands)",
        cli.input.display(),
        cli.out_dir.display(),
        bands.len()
    );
    Ok(())
}
