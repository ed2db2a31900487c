//! Spectrogram Feature Extraction - STFT, mel filterbank, decibel conversion

use log::warn;
use ndarray::{Array2, Array3, ArrayView1};
use rustfft::{num_complex::Complex, FftPlanner};
use std::f32::consts::PI;

use super::config::AMIN;

/// Periodic Hann window
pub fn hann_window(window_length: usize) -> Vec<f32> {
    (0..window_length)
        .map(|i| 0.5 - 0.5 * ((2.0 * PI * i as f32) / window_length as f32).cos())
        .collect()
}

/// Mirror `pad` samples onto each side without repeating the edge sample.
/// Caller guarantees `pad < audio.len()`.
pub fn reflect_pad(audio: ArrayView1<f32>, pad: usize) -> Vec<f32> {
    let n = audio.len();
    let mut padded = Vec::with_capacity(n + 2 * pad);
    padded.extend((1..=pad).rev().map(|i| audio[i]));
    padded.extend(audio.iter().copied());
    padded.extend((0..pad).map(|j| audio[n - 2 - j]));
    padded
}

/// Number of centered frames a signal of `len` samples produces
pub fn num_frames(len: usize, n_fft: usize, hop_length: usize) -> usize {
    let padded = len + 2 * (n_fft / 2);
    (padded - n_fft) / hop_length + 1
}

/// Centered short-time Fourier transform returning the one-sided power
/// spectrum, shape `[n_fft / 2 + 1, frames]`
pub fn stft_power(audio: ArrayView1<f32>, n_fft: usize, hop_length: usize) -> Array2<f32> {
    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n_fft);
    let window = hann_window(n_fft);

    let padded = reflect_pad(audio, n_fft / 2);
    let frames = num_frames(audio.len(), n_fft, hop_length);
    let freq_bins = n_fft / 2 + 1;
    let mut spectrogram = Array2::<f32>::zeros((freq_bins, frames));

    let mut frame = vec![Complex::new(0.0f32, 0.0); n_fft];
    for frame_idx in 0..frames {
        let start = frame_idx * hop_length;
        for (i, slot) in frame.iter_mut().enumerate() {
            *slot = Complex::new(padded[start + i] * window[i], 0.0);
        }

        fft.process(&mut frame);
        for k in 0..freq_bins {
            spectrogram[[k, frame_idx]] = frame[k].norm_sqr();
        }
    }

    spectrogram
}

/// Convert Hz to Mel scale (HTK formula)
pub fn hz_to_mel(hz: f64) -> f64 {
    2595.0 * (1.0 + hz / 700.0).log10()
}

/// Convert Mel to Hz scale (HTK formula)
pub fn mel_to_hz(mel: f64) -> f64 {
    700.0 * (10f64.powf(mel / 2595.0) - 1.0)
}

/// Triangular mel filterbank, shape `[n_mels, n_freqs]`, without area normalization
pub fn create_mel_filterbank(
    n_freqs: usize,
    f_min: f64,
    f_max: f64,
    n_mels: usize,
    sample_rate: u32,
) -> Array2<f32> {
    let mut filterbank = Array2::<f32>::zeros((n_mels, n_freqs));

    let nyquist = (sample_rate / 2) as f64;
    let fftfreqs: Vec<f64> = (0..n_freqs)
        .map(|k| {
            if n_freqs > 1 {
                nyquist * k as f64 / (n_freqs - 1) as f64
            } else {
                0.0
            }
        })
        .collect();

    let m_min = hz_to_mel(f_min);
    let m_max = hz_to_mel(f_max);
    let f_pts: Vec<f64> = (0..n_mels + 2)
        .map(|i| mel_to_hz(m_min + (m_max - m_min) * i as f64 / (n_mels + 1) as f64))
        .collect();
    let fdiff: Vec<f64> = f_pts.windows(2).map(|w| w[1] - w[0]).collect();

    for m in 0..n_mels {
        for k in 0..n_freqs {
            let down = (fftfreqs[k] - f_pts[m]) / fdiff[m];
            let up = (f_pts[m + 2] - fftfreqs[k]) / fdiff[m + 1];
            filterbank[[m, k]] = 0.0f64.max(down.min(up)) as f32;
        }
    }

    let empty = filterbank
        .outer_iter()
        .filter(|row| row.iter().all(|&w| w == 0.0))
        .count();
    if empty > 0 {
        warn!(
            "{} of {} mel filters are all zero; n_mels={} may be too high for n_freqs={}",
            empty, n_mels, n_mels, n_freqs
        );
    }

    filterbank
}

/// Power → decibels in place, then clamp everything to at most `top_db`
/// below the peak of the whole spectrogram
pub fn amplitude_to_db(spec: &mut Array3<f32>, top_db: Option<f32>) {
    spec.mapv_inplace(|x| 10.0 * x.max(AMIN).log10());

    if let Some(top_db) = top_db {
        let peak = spec.iter().fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
        let floor = peak - top_db;
        spec.mapv_inplace(|v| v.max(floor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn test_hann_window_is_periodic() {
        let w = hann_window(4);
        assert_eq!(w.len(), 4);
        assert!(w[0].abs() < 1e-6);
        assert!((w[2] - 1.0).abs() < 1e-6);
        assert!((w[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_pad() {
        let audio = Array1::from(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(reflect_pad(audio.view(), 2), vec![3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_num_frames_centered() {
        assert_eq!(num_frames(16000, 1024, 256), 63);
        assert_eq!(num_frames(16000, 400, 160), 101);
    }

    #[test]
    fn test_stft_peak_at_tone_bin() {
        let n_fft = 256;
        let sample_rate = 8000.0;
        // Bin 32 of 256 at 8kHz is 1000Hz
        let audio: Array1<f32> = (0..2048)
            .map(|i| (2.0 * PI * 1000.0 * i as f32 / sample_rate).sin())
            .collect();

        let spec = stft_power(audio.view(), n_fft, 64);
        assert_eq!(spec.dim(), (129, 33));

        let column = spec.column(10);
        let peak_bin = column
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(k, _)| k)
            .unwrap();
        assert_eq!(peak_bin, 32);
    }

    #[test]
    fn test_mel_round_trip_point() {
        assert!((hz_to_mel(700.0) - 2595.0 * 2f64.log10()).abs() < 1e-9);
        assert!((mel_to_hz(hz_to_mel(4000.0)) - 4000.0).abs() < 1e-6);
    }

    #[test]
    fn test_mel_filterbank_shape_and_peaks() {
        let fb = create_mel_filterbank(513, 0.0, 8000.0, 64, 16000);
        assert_eq!(fb.dim(), (64, 513));
        for row in fb.outer_iter() {
            let max = row.iter().fold(0.0f32, |a, &b| a.max(b));
            assert!(max > 0.0 && max <= 1.0);
        }
    }

    #[test]
    fn test_amplitude_to_db_clamps_dynamic_range() {
        let mut spec = array![[[1.0, 1e-12], [100.0, 0.0]]];
        amplitude_to_db(&mut spec, Some(80.0));

        assert!((spec[[0, 0, 0]] - 0.0).abs() < 1e-5);
        assert!((spec[[0, 1, 0]] - 20.0).abs() < 1e-5);
        // Everything else sits on the floor 80dB below the 20dB peak
        assert!((spec[[0, 0, 1]] - (-60.0)).abs() < 1e-4);
        assert!((spec[[0, 1, 1]] - (-60.0)).abs() < 1e-4);
    }

    #[test]
    fn test_amplitude_to_db_without_clamp() {
        let mut spec = array![[[1.0, 0.0]]];
        amplitude_to_db(&mut spec, None);
        assert!((spec[[0, 0, 1]] - (-100.0)).abs() < 1e-3);
    }
}
