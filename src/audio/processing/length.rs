// Audio Processing - Fixed-length pad/trim
use log::debug;
use ndarray::{concatenate, s, Array2, Axis};
use rand::Rng;

use crate::audio::AudioSample;
use crate::error::{invalid, Result};

/// Number of samples `max_ms` milliseconds covers at `sample_rate`.
/// The rate is floor-divided to samples-per-millisecond first.
pub fn target_len(sample_rate: u32, max_ms: u64) -> Result<usize> {
    (sample_rate as u64 / 1000)
        .checked_mul(max_ms)
        .and_then(|len| usize::try_from(len).ok())
        .ok_or_else(|| {
            invalid(format!(
                "{}ms at {}Hz does not fit in a sample count",
                max_ms, sample_rate
            ))
        })
}

/// Pad (or trim) the signal to exactly `max_ms` milliseconds.
///
/// Longer signals keep their first samples. Shorter signals get zero padding
/// on both sides with a random split, so repeated calls on the same clip
/// place it at different offsets.
pub fn pad_trim<R: Rng + ?Sized>(aud: &AudioSample, max_ms: u64, rng: &mut R) -> Result<AudioSample> {
    let max_len = target_len(aud.sample_rate(), max_ms)?;
    if max_len == 0 {
        return Err(invalid(format!(
            "target length is zero ({}ms at {}Hz)",
            max_ms,
            aud.sample_rate()
        )));
    }

    let sig = aud.signal();
    let (num_rows, sig_len) = sig.dim();

    if sig_len > max_len {
        debug!("Trimming {} samples to {}", sig_len, max_len);
        return Ok(aud.with_signal(sig.slice(s![.., ..max_len]).to_owned()));
    }

    if sig_len < max_len {
        let pad_begin_len = rng.gen_range(0..=max_len - sig_len);
        let pad_end_len = max_len - sig_len - pad_begin_len;
        debug!(
            "Padding {} samples to {} ({} before, {} after)",
            sig_len, max_len, pad_begin_len, pad_end_len
        );

        let pad_begin = Array2::<f32>::zeros((num_rows, pad_begin_len));
        let pad_end = Array2::<f32>::zeros((num_rows, pad_end_len));
        let padded = concatenate(Axis(1), &[pad_begin.view(), sig.view(), pad_end.view()])
            .map_err(|e| invalid(format!("padding signal: {}", e)))?;
        return Ok(aud.with_signal(padded));
    }

    Ok(aud.clone())
}
