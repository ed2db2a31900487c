// src/audio/mod.rs
//
// Audio loading and waveform-level transforms. Every transform takes an
// `AudioSample` by reference and returns a new one.
pub mod loader;
pub mod processing;
pub mod sample;

pub use loader::open;
pub use processing::{pad_trim, rechannel, resample, signal_shift};
pub use sample::AudioSample;
