// audio-prep - Audio preprocessing for speech-model fine-tuning
//
// Stateless helpers that a data-preparation caller sequences itself:
// - audio: loading, fixed-length pad/trim, circular shift, rechannel, resample
// - spectrogram: mel / power spectrogram in decibels
// - augment: SpecAugment-style frequency and time masking
// - plot: waveform and spectrogram figures for visual sanity checks

// Performance logging macros - exported for use by other modules
#[macro_use]
pub mod macros;

pub mod audio;
pub mod augment;
pub mod config;
pub mod error;
pub mod plot;
pub mod spectrogram;

pub use audio::{open, pad_trim, rechannel, resample, signal_shift, AudioSample};
pub use augment::{spectro_augment, MaskAxis, MaskBand, MaskParams};
pub use config::PrepConfig;
pub use error::{AudioPrepError, Result};
pub use plot::{show_spectro, show_transform, show_wave, Figure};
pub use spectrogram::{spectro_gram, Spectrogram, SpectrogramKind, SpectrogramParams};
