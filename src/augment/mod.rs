//! Spectrogram augmentation
//!
//! - masking.rs: SpecAugment-style frequency/time band masking

pub mod masking;

pub use masking::{spectro_augment, MaskAxis, MaskBand, MaskParams};
