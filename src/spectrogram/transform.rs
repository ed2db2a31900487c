// Spectrogram - Generation from an audio sample
use log::{debug, warn};
use ndarray::{s, Array3};

use super::config::{SpectrogramKind, SpectrogramParams, F_MIN, TOP_DB};
use super::features::{amplitude_to_db, create_mel_filterbank, num_frames, stft_power};
use super::Spectrogram;
use crate::audio::AudioSample;
use crate::error::{invalid, Result};

/// Compute a decibel-scaled spectrogram of shape `[channel, bins, time]`.
///
/// `Mel` yields `n_mels` bins, `Magnitude` yields `n_fft / 2 + 1` bins.
/// `Mfcc` is not implemented and returns `Ok(None)`.
pub fn spectro_gram(
    aud: &AudioSample,
    kind: SpectrogramKind,
    params: &SpectrogramParams,
) -> Result<Option<Spectrogram>> {
    if kind == SpectrogramKind::Mfcc {
        warn!("MFCC spectrograms are not implemented; no spectrogram produced");
        return Ok(None);
    }

    let n_fft = params.n_fft;
    let hop = params.hop();
    if n_fft < 2 {
        return Err(invalid(format!("n_fft must be at least 2, got {}", n_fft)));
    }
    if hop == 0 {
        return Err(invalid("hop length must be positive"));
    }
    if kind == SpectrogramKind::Mel && params.n_mels == 0 {
        return Err(invalid("n_mels must be positive"));
    }
    let num_samples = aud.num_samples();
    if num_samples <= n_fft / 2 {
        return Err(invalid(format!(
            "signal of {} samples is too short for n_fft={} (needs more than {})",
            num_samples,
            n_fft,
            n_fft / 2
        )));
    }

    let n_freqs = params.n_freqs();
    let frames = num_frames(num_samples, n_fft, hop);
    let mel_basis = match kind {
        SpectrogramKind::Mel => Some(create_mel_filterbank(
            n_freqs,
            F_MIN as f64,
            (aud.sample_rate() / 2) as f64,
            params.n_mels,
            aud.sample_rate(),
        )),
        _ => None,
    };
    let bins = mel_basis.as_ref().map_or(n_freqs, |fb| fb.nrows());
    perf_debug!(
        "STFT: {} samples x {} ch → {} frames (n_fft={}, hop={})",
        num_samples,
        aud.num_channels(),
        frames,
        n_fft,
        hop
    );

    let mut spec = Array3::<f32>::zeros((aud.num_channels(), bins, frames));
    for (ch, row) in aud.signal().outer_iter().enumerate() {
        let power = perf_timed!(format!("STFT channel {}", ch), stft_power(row, n_fft, hop));
        match &mel_basis {
            Some(fb) => spec.slice_mut(s![ch, .., ..]).assign(&fb.dot(&power)),
            None => spec.slice_mut(s![ch, .., ..]).assign(&power),
        }
    }

    amplitude_to_db(&mut spec, Some(TOP_DB));
    debug!("Computed {} spectrogram with shape {:?}", kind, spec.shape());

    Ok(Some(spec))
}
