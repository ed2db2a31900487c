//! Preprocessing configuration
//!
//! Every section defaults independently, so a JSON file only needs the keys
//! it wants to override.

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::augment::MaskParams;
use crate::error::Result;
use crate::spectrogram::config::{DEFAULT_N_FFT, DEFAULT_N_MELS};
use crate::spectrogram::{SpectrogramKind, SpectrogramParams};

/// Waveform-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    /// Fixed clip duration for pad/trim
    pub max_ms: u64,
    pub max_shift_pct: f64,
    /// Resample to this rate after loading when set
    pub target_sample_rate: Option<u32>,
    /// Rechannel to this count after loading when set
    pub target_channels: Option<usize>,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            max_ms: 4000,
            max_shift_pct: 0.4,
            target_sample_rate: None,
            target_channels: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramConfig {
    pub kind: SpectrogramKind,
    pub n_mels: usize,
    pub n_fft: usize,
    pub hop_length: Option<usize>,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            kind: SpectrogramKind::Mel,
            n_mels: DEFAULT_N_MELS,
            n_fft: DEFAULT_N_FFT,
            hop_length: None,
        }
    }
}

impl SpectrogramConfig {
    pub fn params(&self) -> SpectrogramParams {
        SpectrogramParams {
            n_mels: self.n_mels,
            n_fft: self.n_fft,
            hop_length: self.hop_length,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    pub clip: ClipConfig,
    pub spectrogram: SpectrogramConfig,
    pub augment: MaskParams,
}

impl PrepConfig {
    /// Read a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: PrepConfig = serde_json::from_str(&content)?;
        info!("Loaded preprocessing config from {}", path.display());
        Ok(config)
    }

    /// Whisper front end: 16kHz mono, 30 second clips, 80 mel bins
    pub fn whisper() -> Self {
        let params = SpectrogramParams::whisper();
        Self {
            clip: ClipConfig {
                max_ms: 30_000,
                max_shift_pct: 0.0,
                target_sample_rate: Some(16_000),
                target_channels: Some(1),
            },
            spectrogram: SpectrogramConfig {
                kind: SpectrogramKind::Mel,
                n_mels: params.n_mels,
                n_fft: params.n_fft,
                hop_length: params.hop_length,
            },
            augment: MaskParams {
                max_mask_pct: 0.1,
                n_freq_masks: 2,
                n_time_masks: 2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = PrepConfig::default();
        assert_eq!(config.clip.max_ms, 4000);
        assert_eq!(config.spectrogram.kind, SpectrogramKind::Mel);
        assert_eq!(config.spectrogram.params(), SpectrogramParams::default());
        assert_eq!(config.augment, MaskParams::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prep.json");
        std::fs::write(
            &path,
            r#"{ "clip": { "max_ms": 1000 }, "spectrogram": { "kind": "spectrogram", "n_fft": 512 } }"#,
        )
        .unwrap();

        let config = PrepConfig::load(&path).unwrap();
        assert_eq!(config.clip.max_ms, 1000);
        assert_eq!(config.clip.max_shift_pct, 0.4);
        assert_eq!(config.spectrogram.kind, SpectrogramKind::Magnitude);
        assert_eq!(config.spectrogram.n_fft, 512);
        assert_eq!(config.spectrogram.n_mels, 64);
        assert_eq!(config.augment.n_freq_masks, 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ clip: ").unwrap();
        assert!(PrepConfig::load(&path).is_err());
    }

    #[test]
    fn test_whisper_preset() {
        let config = PrepConfig::whisper();
        assert_eq!(config.spectrogram.params().hop(), 160);
        assert_eq!(config.clip.target_sample_rate, Some(16_000));
    }
}
