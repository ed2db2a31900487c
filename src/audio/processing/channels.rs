// Audio Processing - Channel conversion
use log::debug;
use ndarray::{Array2, Axis};

use crate::audio::AudioSample;
use crate::error::{invalid, Result};

/// Convert to `new_channels` channels.
///
/// Multi-channel → mono averages the channels; mono → N duplicates the
/// single channel. Any other conversion is rejected.
pub fn rechannel(aud: &AudioSample, new_channels: usize) -> Result<AudioSample> {
    let current = aud.num_channels();
    if new_channels == current {
        return Ok(aud.clone());
    }

    match (current, new_channels) {
        (_, 1) => {
            debug!("Downmixing {} channels to mono", current);
            let mono = audio_to_mono(aud.signal());
            Ok(aud.with_signal(mono.insert_axis(Axis(0))))
        }
        (1, n) if n > 1 => {
            debug!("Duplicating mono signal into {} channels", n);
            let row = aud.channel(0);
            let mut out = Array2::<f32>::zeros((n, aud.num_samples()));
            for mut target in out.outer_iter_mut() {
                target.assign(&row);
            }
            Ok(aud.with_signal(out))
        }
        _ => Err(invalid(format!(
            "cannot convert {} channels to {}",
            current, new_channels
        ))),
    }
}

/// Average all channels into a single row
fn audio_to_mono(signal: &Array2<f32>) -> ndarray::Array1<f32> {
    let channels = signal.nrows() as f32;
    signal.sum_axis(Axis(0)) / channels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_to_mono_averages() {
        let aud = AudioSample::from_channels(vec![vec![1.0, 0.0], vec![0.0, -1.0]], 8000).unwrap();
        let mono = rechannel(&aud, 1).unwrap();
        assert_eq!(mono.num_channels(), 1);
        assert_eq!(mono.channel(0).to_vec(), vec![0.5, -0.5]);
    }

    #[test]
    fn test_mono_to_stereo_duplicates() {
        let aud = AudioSample::mono(vec![0.25, -0.75, 1.0], 8000).unwrap();
        let stereo = rechannel(&aud, 2).unwrap();
        assert_eq!(stereo.num_channels(), 2);
        assert_eq!(stereo.channel(0), stereo.channel(1));
        assert_eq!(stereo.channel(1).to_vec(), vec![0.25, -0.75, 1.0]);
    }

    #[test]
    fn test_unsupported_conversion_rejected() {
        let aud = AudioSample::from_channels(vec![vec![0.0; 4]; 2], 8000).unwrap();
        assert!(rechannel(&aud, 6).is_err());
        assert!(rechannel(&aud, 0).is_err());
    }
}
