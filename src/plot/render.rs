// Plot - Waveform and spectrogram figures
use log::info;
use ndarray::{s, ArrayView1, ArrayView2};

use super::colormap::{intensity, viridis};
use super::figure::{Figure, AXIS};
use crate::audio::AudioSample;
use crate::spectrogram::Spectrogram;

pub const WAVE_SIZE: (u32, u32) = (1200, 300);
pub const SPECTRO_SIZE: (u32, u32) = (600, 600);

const WAVE_COLOR: [u8; 3] = [31, 119, 180];
const ORIG_COLOR: [u8; 3] = [191, 0, 191];
const TRANS_COLOR: [u8; 3] = [0, 191, 191];

/// Line plot of the first channel
pub fn show_wave(aud: &AudioSample, label: &str) -> Figure {
    let (width, height) = WAVE_SIZE;
    let mut fig = Figure::new(width, height, label);
    fig.hline(height / 2, AXIS);

    let row = aud.channel(0);
    let scale = peak(&[row]);
    draw_series(&mut fig, row, scale, WAVE_COLOR, 1.0);

    info!("Rendered waveform '{}' ({} samples)", label, row.len());
    fig
}

/// Overlay the first channel before (magenta) and after (translucent cyan) a transform
pub fn show_transform(orig: Option<&AudioSample>, trans: Option<&AudioSample>, label: &str) -> Figure {
    let (width, height) = WAVE_SIZE;
    let mut fig = Figure::new(width, height, label);
    fig.hline(height / 2, AXIS);

    let rows: Vec<ArrayView1<f32>> = [orig, trans].into_iter().flatten().map(|a| a.channel(0)).collect();
    let scale = peak(&rows);

    // Both series share the x axis, sized to the longer one
    let span = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if let Some(aud) = orig {
        draw_series_spanning(&mut fig, aud.channel(0), span, scale, ORIG_COLOR, 1.0);
    }
    if let Some(aud) = trans {
        draw_series_spanning(&mut fig, aud.channel(0), span, scale, TRANS_COLOR, 0.5);
    }

    info!("Rendered transform comparison '{}'", label);
    fig
}

/// Spectrogram image, row 0 at the top. Three-channel input is drawn as RGB,
/// anything else shows channel 0 through a colormap.
pub fn show_spectro(spec: &Spectrogram, label: &str) -> Figure {
    let (width, height) = SPECTRO_SIZE;
    let title = format!("{}, {:?}", label, spec.shape());
    let mut fig = Figure::new(width, height, title.as_str());

    let (channels, bins, steps) = spec.dim();
    if channels == 0 || bins == 0 || steps == 0 {
        info!("Rendered empty spectrogram '{}'", title);
        return fig;
    }

    let (min, max) = spec
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = if max > min { max - min } else { 1.0 };
    let norm = |v: f32| (v - min) / range;

    let planes: Vec<ArrayView2<f32>> = if channels == 3 {
        (0..3).map(|c| spec.slice(s![c, .., ..])).collect()
    } else {
        vec![spec.slice(s![0, .., ..])]
    };

    for y in 0..height {
        let f = (y as usize * bins / height as usize).min(bins - 1);
        for x in 0..width {
            let t = (x as usize * steps / width as usize).min(steps - 1);
            let color = if planes.len() == 3 {
                [
                    intensity(norm(planes[0][[f, t]])),
                    intensity(norm(planes[1][[f, t]])),
                    intensity(norm(planes[2][[f, t]])),
                ]
            } else {
                viridis(norm(planes[0][[f, t]]))
            };
            fig.set_pixel(x, y, color);
        }
    }

    info!("Rendered spectrogram '{}'", title);
    fig
}

/// Largest absolute amplitude across the series, or 1.0 for silence
fn peak(rows: &[ArrayView1<f32>]) -> f32 {
    let max = rows
        .iter()
        .flat_map(|r| r.iter())
        .fold(0.0f32, |acc, &v| acc.max(v.abs()));
    if max > 0.0 && max.is_finite() {
        max
    } else {
        1.0
    }
}

fn draw_series(fig: &mut Figure, samples: ArrayView1<f32>, scale: f32, color: [u8; 3], alpha: f32) {
    let span = samples.len();
    draw_series_spanning(fig, samples, span, scale, color, alpha);
}

/// Min/max envelope per pixel column; `span` samples map onto the full width
fn draw_series_spanning(
    fig: &mut Figure,
    samples: ArrayView1<f32>,
    span: usize,
    scale: f32,
    color: [u8; 3],
    alpha: f32,
) {
    let n = samples.len();
    if n == 0 || span == 0 {
        return;
    }

    let width = fig.width() as usize;
    let bottom = fig.height() as f32 - 1.0;
    let mid = fig.height() as f32 / 2.0;
    let to_y = |v: f32| (mid - (v / scale) * mid * 0.9).clamp(0.0, bottom) as u32;

    let mut prev: Option<f32> = None;
    for x in 0..width {
        let start = x * span / width;
        if start >= n {
            break;
        }
        let end = ((x + 1) * span / width).clamp(start + 1, n);

        let window = samples.slice(s![start..end]);
        let (mut lo, mut hi) = window
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        // Join to the previous column so sparse plots stay connected
        if let Some(p) = prev {
            lo = lo.min(p);
            hi = hi.max(p);
        }
        prev = Some(samples[end - 1]);

        fig.vline(x as u32, to_y(hi), to_y(lo), color, alpha);
    }
}
