// Augmentation - SpecAugment frequency and time masking
use log::debug;
use ndarray::s;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{invalid, Result};
use crate::spectrogram::Spectrogram;

/// Masking policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskParams {
    /// Largest band, as a fraction of the axis length
    pub max_mask_pct: f64,
    pub n_freq_masks: usize,
    pub n_time_masks: usize,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            max_mask_pct: 0.1,
            n_freq_masks: 1,
            n_time_masks: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskAxis {
    Frequency,
    Time,
}

/// One masked band: `[start, start + width)` along `axis`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskBand {
    pub axis: MaskAxis,
    pub start: usize,
    pub width: usize,
}

/// Overwrite random frequency rows and time columns of channel 0 with the
/// spectrogram's mean value.
///
/// The spectrogram is modified in place; the returned bands describe exactly
/// what was written. Band widths are drawn from `[0, ceil(len * max_mask_pct)]`
/// and offsets from `[0, len - width]`. Other channels are left alone.
pub fn spectro_augment<R: Rng + ?Sized>(
    spec: &mut Spectrogram,
    params: &MaskParams,
    rng: &mut R,
) -> Result<Vec<MaskBand>> {
    let pct = params.max_mask_pct;
    if !pct.is_finite() || !(0.0..=1.0).contains(&pct) {
        return Err(invalid(format!("max_mask_pct must be within [0, 1], got {}", pct)));
    }

    let (channels, n_mels, n_steps) = spec.dim();
    if channels == 0 || n_mels == 0 || n_steps == 0 {
        return Err(invalid(format!(
            "cannot mask an empty spectrogram {:?}",
            spec.shape()
        )));
    }

    let max_f = (n_mels as f64 * pct).ceil() as usize;
    let max_t = (n_steps as f64 * pct).ceil() as usize;

    // Fill value is taken before any band is written
    let fill = spec.mean().unwrap_or(0.0);
    let mut bands = Vec::with_capacity(params.n_freq_masks + params.n_time_masks);

    for _ in 0..params.n_freq_masks {
        let f = rng.gen_range(0..=max_f);
        let f0 = rng.gen_range(0..=n_mels - f);
        spec.slice_mut(s![0, f0..f0 + f, ..]).fill(fill);
        bands.push(MaskBand {
            axis: MaskAxis::Frequency,
            start: f0,
            width: f,
        });
    }

    for _ in 0..params.n_time_masks {
        let t = rng.gen_range(0..=max_t);
        let t0 = rng.gen_range(0..=n_steps - t);
        spec.slice_mut(s![0, .., t0..t0 + t]).fill(fill);
        bands.push(MaskBand {
            axis: MaskAxis::Time,
            start: t0,
            width: t,
        });
    }

    debug!("Applied {} masks (F={}, T={}, fill={:.3})", bands.len(), max_f, max_t, fill);
    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ramp_spec(channels: usize, bins: usize, steps: usize) -> Spectrogram {
        Array3::from_shape_fn((channels, bins, steps), |(c, f, t)| {
            (c * 10_000 + f * 100 + t) as f32
        })
    }

    #[test]
    fn test_masks_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(21);
        let params = MaskParams {
            max_mask_pct: 0.1,
            n_freq_masks: 3,
            n_time_masks: 3,
        };

        for _ in 0..50 {
            let mut spec = ramp_spec(1, 64, 63);
            let bands = spectro_augment(&mut spec, &params, &mut rng).unwrap();
            assert_eq!(bands.len(), 6);
            for band in bands {
                match band.axis {
                    MaskAxis::Frequency => {
                        assert!(band.width <= 7);
                        assert!(band.start + band.width <= 64);
                    }
                    MaskAxis::Time => {
                        assert!(band.width <= 7);
                        assert!(band.start + band.width <= 63);
                    }
                }
            }
        }
    }

    #[test]
    fn test_masked_cells_hold_the_mean() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut spec = ramp_spec(1, 20, 30);
        let mean = spec.mean().unwrap();
        let params = MaskParams {
            max_mask_pct: 0.2,
            n_freq_masks: 1,
            n_time_masks: 1,
        };

        let bands = spectro_augment(&mut spec, &params, &mut rng).unwrap();
        for band in &bands {
            for i in band.start..band.start + band.width {
                match band.axis {
                    MaskAxis::Frequency => assert!(spec.slice(s![0, i, ..]).iter().all(|&v| v == mean)),
                    MaskAxis::Time => assert!(spec.slice(s![0, .., i]).iter().all(|&v| v == mean)),
                }
            }
        }

        // Cells outside every band are untouched
        for f in 0..20 {
            for t in 0..30 {
                let covered = bands.iter().any(|b| match b.axis {
                    MaskAxis::Frequency => (b.start..b.start + b.width).contains(&f),
                    MaskAxis::Time => (b.start..b.start + b.width).contains(&t),
                });
                if !covered {
                    assert_eq!(spec[[0, f, t]], (f * 100 + t) as f32);
                }
            }
        }
    }

    #[test]
    fn test_only_channel_zero_is_masked() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut spec = ramp_spec(2, 16, 16);
        let original = spec.clone();
        let params = MaskParams {
            max_mask_pct: 1.0,
            n_freq_masks: 4,
            n_time_masks: 4,
        };

        spectro_augment(&mut spec, &params, &mut rng).unwrap();
        assert_eq!(spec.slice(s![1, .., ..]), original.slice(s![1, .., ..]));
    }

    #[test]
    fn test_full_width_band_has_single_offset() {
        // With pct = 1.0 the band may span the whole axis; offset must collapse to 0
        let mut rng = StdRng::seed_from_u64(0);
        let params = MaskParams {
            max_mask_pct: 1.0,
            n_freq_masks: 200,
            n_time_masks: 0,
        };
        let mut spec = ramp_spec(1, 3, 4);
        let bands = spectro_augment(&mut spec, &params, &mut rng).unwrap();
        for band in bands.iter().filter(|b| b.width == 3) {
            assert_eq!(band.start, 0);
        }
        assert!(bands.iter().any(|b| b.width == 3));
    }

    #[test]
    fn test_same_seed_same_masks() {
        let params = MaskParams::default();
        let mut a = ramp_spec(1, 40, 40);
        let mut b = ramp_spec(1, 40, 40);
        let bands_a = spectro_augment(&mut a, &params, &mut StdRng::seed_from_u64(99)).unwrap();
        let bands_b = spectro_augment(&mut b, &params, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(bands_a, bands_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut spec = ramp_spec(1, 8, 8);
        let bad = MaskParams {
            max_mask_pct: 1.2,
            ..Default::default()
        };
        assert!(spectro_augment(&mut spec, &bad, &mut rng).is_err());

        let mut empty = Array3::<f32>::zeros((1, 0, 5));
        assert!(spectro_augment(&mut empty, &MaskParams::default(), &mut rng).is_err());
    }
}
