// Audio - Sample value type
use ndarray::{Array2, ArrayView1, Axis};

use crate::error::{invalid, Result};

/// A decoded signal of shape `[channels, num_samples]` plus its sample rate.
///
/// Every transform in this crate returns a new `AudioSample` rather than
/// mutating the one it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSample {
    signal: Array2<f32>,
    sample_rate: u32,
}

impl AudioSample {
    pub fn new(signal: Array2<f32>, sample_rate: u32) -> Result<Self> {
        if signal.nrows() == 0 {
            return Err(invalid("audio sample must have at least one channel"));
        }
        if sample_rate == 0 {
            return Err(invalid("sample rate must be positive"));
        }
        Ok(Self { signal, sample_rate })
    }

    /// Build a single-channel sample from a flat buffer
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        let len = samples.len();
        let signal = Array2::from_shape_vec((1, len), samples)
            .map_err(|e| invalid(format!("mono buffer: {}", e)))?;
        Self::new(signal, sample_rate)
    }

    /// Build a sample from one buffer per channel; all channels must be the same length
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        let num_channels = channels.len();
        let len = channels.first().map_or(0, Vec::len);
        if channels.iter().any(|c| c.len() != len) {
            return Err(invalid("all channels must have the same number of samples"));
        }
        let flat: Vec<f32> = channels.into_iter().flatten().collect();
        let signal = Array2::from_shape_vec((num_channels, len), flat)
            .map_err(|e| invalid(format!("channel buffers: {}", e)))?;
        Self::new(signal, sample_rate)
    }

    pub fn signal(&self) -> &Array2<f32> {
        &self.signal
    }

    pub fn into_signal(self) -> Array2<f32> {
        self.signal
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn num_channels(&self) -> usize {
        self.signal.nrows()
    }

    pub fn num_samples(&self) -> usize {
        self.signal.ncols()
    }

    pub fn channel(&self, index: usize) -> ArrayView1<'_, f32> {
        self.signal.index_axis(Axis(0), index)
    }

    pub fn duration_ms(&self) -> f64 {
        self.num_samples() as f64 * 1000.0 / self.sample_rate as f64
    }

    /// Same sample rate, new signal; used by the transforms
    pub(crate) fn with_signal(&self, signal: Array2<f32>) -> Self {
        Self {
            signal,
            sample_rate: self.sample_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_constructor() {
        let aud = AudioSample::mono(vec![0.0; 16000], 16000).unwrap();
        assert_eq!(aud.num_channels(), 1);
        assert_eq!(aud.num_samples(), 16000);
        assert_eq!(aud.duration_ms(), 1000.0);
    }

    #[test]
    fn test_from_channels_rejects_ragged_input() {
        let result = AudioSample::from_channels(vec![vec![0.0; 4], vec![0.0; 3]], 8000);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        assert!(AudioSample::mono(vec![0.1, 0.2], 0).is_err());
    }

    #[test]
    fn test_into_signal_hands_back_the_buffer() {
        let aud = AudioSample::from_channels(vec![vec![0.5, 0.25], vec![-0.5, -0.25]], 8000).unwrap();
        let signal = aud.into_signal();
        assert_eq!(signal.dim(), (2, 2));
        assert_eq!(signal[[1, 1]], -0.25);
    }

    #[test]
    fn test_empty_signal_is_allowed() {
        let aud = AudioSample::mono(Vec::new(), 16000).unwrap();
        assert_eq!(aud.num_samples(), 0);
    }
}
