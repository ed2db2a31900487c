// Audio Processing - Resampling
use log::debug;
use ndarray::Array2;
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::audio::AudioSample;
use crate::error::{invalid, AudioPrepError, Result};

/// Band-limited resampling of every channel to `new_rate`.
///
/// The output holds `ceil(num_samples * new_rate / old_rate)` samples per channel.
pub fn resample(aud: &AudioSample, new_rate: u32) -> Result<AudioSample> {
    if new_rate == 0 {
        return Err(invalid("target sample rate must be positive"));
    }

    let from_rate = aud.sample_rate();
    if from_rate == new_rate || aud.num_samples() == 0 {
        return AudioSample::new(aud.clone().into_signal(), new_rate);
    }

    let ratio = new_rate as f64 / from_rate as f64;

    // Upsampling gets the longer, cubic-interpolated kernel
    let (sinc_len, interpolation, oversampling) = if ratio > 1.0 {
        debug!("Upsampling: {}Hz → {}Hz (ratio: {:.2}x)", from_rate, new_rate, ratio);
        (384, SincInterpolationType::Cubic, 384)
    } else {
        debug!("Downsampling: {}Hz → {}Hz (ratio: {:.2}x)", from_rate, new_rate, ratio);
        (256, SincInterpolationType::Linear, 256)
    };

    let params = SincInterpolationParameters {
        sinc_len,
        f_cutoff: 0.95,
        interpolation,
        oversampling_factor: oversampling,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(
        ratio,
        2.0,
        params,
        aud.num_samples(),
        aud.num_channels(),
    )
    .map_err(|e| AudioPrepError::Resample(e.to_string()))?;

    let waves_in: Vec<Vec<f32>> = aud.signal().outer_iter().map(|row| row.to_vec()).collect();
    let mut waves_out = resampler
        .process(&waves_in, None)
        .map_err(|e| AudioPrepError::Resample(e.to_string()))?;

    // Flush the samples still held in the sinc delay line
    let tail = resampler
        .process_partial(None::<&[Vec<f32>]>, None)
        .map_err(|e| AudioPrepError::Resample(e.to_string()))?;

    let out_len = (aud.num_samples() as f64 * ratio).ceil() as usize;
    for (wave, rest) in waves_out.iter_mut().zip(tail) {
        wave.extend(rest);
        wave.resize(out_len, 0.0);
    }
    debug!("Resampling complete: {} samples → {} samples", aud.num_samples(), out_len);

    let flat: Vec<f32> = waves_out.into_iter().flatten().collect();
    let signal = Array2::from_shape_vec((aud.num_channels(), out_len), flat)
        .map_err(|e| AudioPrepError::Resample(e.to_string()))?;
    AudioSample::new(signal, new_rate)
}
