//! Spectrogram Configuration and Constants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Transform constants
pub const F_MIN: f32 = 0.0;
/// Dynamic range kept below the peak after decibel conversion
pub const TOP_DB: f32 = 80.0;
/// Floor applied before taking the logarithm
pub const AMIN: f32 = 1e-10;

// Defaults
pub const DEFAULT_N_MELS: usize = 64;
pub const DEFAULT_N_FFT: usize = 1024;

/// Which time-frequency representation to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpectrogramKind {
    /// Mel filterbank applied to the power spectrogram
    #[default]
    Mel,
    /// Recognized but not implemented; produces no spectrogram
    Mfcc,
    /// Plain one-sided power spectrogram
    #[serde(rename = "spectrogram", alias = "magnitude")]
    Magnitude,
}

impl FromStr for SpectrogramKind {
    type Err = std::convert::Infallible;

    /// Anything other than `mel` or `mfcc` falls back to the plain spectrogram
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "mel" => SpectrogramKind::Mel,
            "mfcc" => SpectrogramKind::Mfcc,
            _ => SpectrogramKind::Magnitude,
        })
    }
}

impl fmt::Display for SpectrogramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpectrogramKind::Mel => "mel",
            SpectrogramKind::Mfcc => "mfcc",
            SpectrogramKind::Magnitude => "spectrogram",
        };
        f.write_str(name)
    }
}

/// STFT and filterbank parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramParams {
    pub n_mels: usize,
    pub n_fft: usize,
    /// Frame stride in samples; `None` uses `n_fft / 4`
    pub hop_length: Option<usize>,
}

impl Default for SpectrogramParams {
    fn default() -> Self {
        Self {
            n_mels: DEFAULT_N_MELS,
            n_fft: DEFAULT_N_FFT,
            hop_length: None,
        }
    }
}

impl SpectrogramParams {
    /// Whisper-style front end: 25ms frames, 10ms stride at 16kHz, 80 mel bins
    pub fn whisper() -> Self {
        Self {
            n_mels: 80,
            n_fft: 400,
            hop_length: Some(160),
        }
    }

    pub fn hop(&self) -> usize {
        self.hop_length.unwrap_or(self.n_fft / 4)
    }

    /// One-sided FFT bin count
    pub fn n_freqs(&self) -> usize {
        self.n_fft / 2 + 1
    }
}
