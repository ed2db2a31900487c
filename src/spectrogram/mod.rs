//! Spectrogram generation - mel and power spectrograms in decibels
//!
//! Module structure:
//! - config.rs: Constants, SpectrogramKind and SpectrogramParams
//! - features.rs: Hann window, STFT, mel filterbank, decibel conversion
//! - transform.rs: spectro_gram entry point

pub mod config;
pub mod features;
pub mod transform;

use ndarray::Array3;

/// Decibel-scaled values, shape `[channel, frequency_bins, time_steps]`
pub type Spectrogram = Array3<f32>;

pub use config::{SpectrogramKind, SpectrogramParams, TOP_DB};
pub use transform::spectro_gram;
