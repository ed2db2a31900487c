// Audio Processing - Circular time shift
use log::debug;
use ndarray::{s, Array2};
use rand::Rng;

use crate::audio::AudioSample;
use crate::error::{invalid, Result};

/// Rotate every channel right by a random amount of up to `max_shift_pct` of its
/// length. Samples pushed past the end wrap around to the start.
///
/// Multi-channel input is rotated per channel by the same amount, unlike a roll
/// over the flattened `[channels, samples]` buffer, so no samples cross channels.
pub fn signal_shift<R: Rng + ?Sized>(
    aud: &AudioSample,
    max_shift_pct: f64,
    rng: &mut R,
) -> Result<AudioSample> {
    if !max_shift_pct.is_finite() || !(0.0..=1.0).contains(&max_shift_pct) {
        return Err(invalid(format!(
            "max_shift_pct must be within [0, 1], got {}",
            max_shift_pct
        )));
    }

    let len = aud.num_samples();
    let roll_by = (rng.gen::<f64>() * max_shift_pct * len as f64) as usize;
    debug!("Rolling {} samples by {}", len, roll_by);

    Ok(aud.with_signal(roll(aud.signal(), roll_by)))
}

/// Circular right rotation along the time axis: `out[i] = sig[(i - k) mod n]`
pub fn roll(sig: &Array2<f32>, k: usize) -> Array2<f32> {
    let n = sig.ncols();
    if n == 0 {
        return sig.clone();
    }
    let k = k % n;
    if k == 0 {
        return sig.clone();
    }

    let mut out = Array2::<f32>::zeros(sig.raw_dim());
    out.slice_mut(s![.., k..]).assign(&sig.slice(s![.., ..n - k]));
    out.slice_mut(s![.., ..k]).assign(&sig.slice(s![.., n - k..]));
    out
}
